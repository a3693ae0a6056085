use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::cli::*;

#[derive(Parser, Debug, Clone)]
pub struct CompareOptions {
    /// 匹配百分比的输出文件
    #[arg(short, long, value_name = "FILE", default_value = "output.txt")]
    pub output: PathBuf,
    /// 匹配可视化图片的保存路径
    #[arg(long, value_name = "FILE", default_value = "feature_matches_output.png")]
    pub visualization: PathBuf,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "artmatch", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 监听状态文件，内容为 ready 时比较两张图片
    Watch(WatchCommand),
    /// 立即比较两张图片
    Compare(CompareCommand),
}

/// 解析轮询间隔，单位为秒，可以是小数
pub fn parse_interval(s: &str) -> anyhow::Result<Duration> {
    let secs: f64 = s.parse()?;
    match Duration::try_from_secs_f64(secs) {
        Ok(interval) if !interval.is_zero() => Ok(interval),
        _ => Err(anyhow::anyhow!("无效的轮询间隔: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("2").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_interval("0.5").unwrap(), Duration::from_millis(500));
        assert!(parse_interval("0").is_err());
        assert!(parse_interval("-1").is_err());
        assert!(parse_interval("abc").is_err());
        assert!(parse_interval("inf").is_err());
        assert!(parse_interval("NaN").is_err());
        // 超出 Duration 范围，或者小到舍入为 0
        assert!(parse_interval("1e300").is_err());
        assert!(parse_interval("1e-12").is_err());
    }

    #[test]
    fn test_watch_defaults() {
        let opts = Opts::try_parse_from(["artmatch", "watch"]).unwrap();
        let SubCommand::Watch(cmd) = opts.subcmd else { panic!("expected watch") };
        assert_eq!(cmd.status, PathBuf::from("input.txt"));
        assert_eq!(cmd.image1, PathBuf::from("pics/og1.png"));
        assert_eq!(cmd.image2, PathBuf::from("pics/try.png"));
        assert_eq!(cmd.compare.output, PathBuf::from("output.txt"));
        assert_eq!(cmd.compare.visualization, PathBuf::from("feature_matches_output.png"));
        assert_eq!(cmd.interval, Duration::from_secs(2));
    }

    #[test]
    fn test_compare_requires_images() {
        assert!(Opts::try_parse_from(["artmatch", "compare", "a.png"]).is_err());
        let opts = Opts::try_parse_from(["artmatch", "compare", "a.png", "b.png", "-o", "r.txt"])
            .unwrap();
        let SubCommand::Compare(cmd) = opts.subcmd else { panic!("expected compare") };
        assert_eq!(cmd.compare.output, PathBuf::from("r.txt"));
    }
}
