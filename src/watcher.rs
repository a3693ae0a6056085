use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use log::{debug, info, warn};
use tokio::task::spawn_blocking;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::compare::{Compare, Outcome};
use crate::status::{self, Status};

/// 一次比较任务涉及的文件
#[derive(Debug, Clone)]
pub struct Job {
    pub image1: PathBuf,
    pub image2: PathBuf,
    pub output: PathBuf,
}

/// 轮询状态文件，在其内容为 ready 时执行比较
pub struct Watcher<C> {
    status: PathBuf,
    job: Job,
    interval: Duration,
    comparator: Arc<C>,
}

impl<C: Compare> Watcher<C> {
    /// 轮询间隔为 0 时返回错误
    pub fn new(status: PathBuf, job: Job, interval: Duration, comparator: C) -> Result<Self> {
        if interval.is_zero() {
            bail!("轮询间隔不能为 0");
        }
        Ok(Self { status, job, interval, comparator: Arc::new(comparator) })
    }

    /// 持续轮询直到 `cancel` 被触发
    ///
    /// 正在进行的比较不会被打断；状态文件读写失败时直接返回错误。
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("开始监听状态文件 {}", self.status.display());
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll().await?;
                }
                _ = cancel.cancelled() => {
                    info!("停止监听");
                    break;
                }
            }
        }
        Ok(())
    }

    /// 检查一次状态文件，返回是否触发了比较
    pub async fn poll(&self) -> Result<bool> {
        let current = status::read(&self.status).await?;
        debug!("状态: {}", current);
        if current != Status::Ready {
            return Ok(false);
        }

        info!("状态文件为 ready，开始比较");
        let comparator = self.comparator.clone();
        let job = self.job.clone();
        let outcome =
            spawn_blocking(move || comparator.compare(&job.image1, &job.image2, &job.output))
                .await??;

        match outcome {
            Outcome::LoadFailed => {
                warn!("图片读取失败，状态文件保持不变");
            }
            _ => status::write(&self.status, Status::NotReady).await?,
        }
        Ok(true)
    }
}
