use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tokio::task::spawn_blocking;

use crate::cli::SubCommandExtend;
use crate::compare::{Compare, Comparator, Outcome};
use crate::config::{CompareOptions, Opts};

#[derive(Parser, Debug, Clone)]
pub struct CompareCommand {
    #[command(flatten)]
    pub compare: CompareOptions,
    /// 图片1
    pub image1: PathBuf,
    /// 图片2
    pub image2: PathBuf,
}

impl SubCommandExtend for CompareCommand {
    async fn run(&self, _opts: &Opts) -> Result<()> {
        let comparator = Comparator::new(self.compare.visualization.clone());
        let cmd = self.clone();
        let outcome = spawn_blocking(move || {
            comparator.compare(&cmd.image1, &cmd.image2, &cmd.compare.output)
        })
        .await??;

        if outcome == Outcome::LoadFailed {
            bail!("无法读取图片: {} {}", self.image1.display(), self.image2.display());
        }
        Ok(())
    }
}
