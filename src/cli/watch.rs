use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use tokio_util::sync::CancellationToken;

use crate::cli::SubCommandExtend;
use crate::compare::Comparator;
use crate::config::{CompareOptions, Opts, parse_interval};
use crate::watcher::{Job, Watcher};

#[derive(Parser, Debug, Clone)]
pub struct WatchCommand {
    #[command(flatten)]
    pub compare: CompareOptions,
    /// 状态文件，内容为 ready 时触发比较
    #[arg(short, long, value_name = "FILE", default_value = "input.txt")]
    pub status: PathBuf,
    /// 图片1
    #[arg(long, value_name = "FILE", default_value = "pics/og1.png")]
    pub image1: PathBuf,
    /// 图片2
    #[arg(long, value_name = "FILE", default_value = "pics/try.png")]
    pub image2: PathBuf,
    /// 轮询间隔，单位为秒
    #[arg(short, long, value_name = "SECS", default_value = "2", value_parser = parse_interval)]
    pub interval: Duration,
}

impl SubCommandExtend for WatchCommand {
    async fn run(&self, _opts: &Opts) -> Result<()> {
        let job = Job {
            image1: self.image1.clone(),
            image2: self.image2.clone(),
            output: self.compare.output.clone(),
        };
        let comparator = Comparator::new(self.compare.visualization.clone());
        let watcher = Watcher::new(self.status.clone(), job, self.interval, comparator)?;

        let cancel = CancellationToken::new();
        let stop = cancel.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("收到 Ctrl-C，等待当前比较完成后退出"),
                Err(e) => error!("无法监听 Ctrl-C: {}", e),
            }
            stop.cancel();
        });

        watcher.run(cancel).await
    }
}
