use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info};

use crate::matcher::{Match, cross_check_match};
use crate::orb::OrbDetector;
use crate::score::{NO_DESCRIPTORS_RESULT, format_score, match_percentage};
use crate::utils;

/// 比较前统一缩放到的尺寸
pub const WORK_SIZE: (i32, i32) = (800, 600);
/// 可视化结果的尺寸
pub const CANVAS_SIZE: (i32, i32) = (1920, 1080);
/// 可视化时绘制的最佳匹配数量
pub const DRAW_MATCHES: usize = 20;

/// 一次比较的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 任意一张图片读取失败，没有写入任何文件
    LoadFailed,
    /// 任意一张图片没有描述符，结果文件写入 0.00%
    NoDescriptors,
    /// 正常完成比较
    Scored { percentage: f64, matches: Vec<Match> },
}

/// 图片比较器
pub trait Compare: Send + Sync + 'static {
    fn compare(&self, image1: &Path, image2: &Path, output: &Path) -> Result<Outcome>;
}

/// 基于 ORB 特征匹配的比较器
#[derive(Debug, Clone)]
pub struct Comparator {
    visualization: PathBuf,
}

impl Comparator {
    pub fn new(visualization: impl Into<PathBuf>) -> Self {
        Self { visualization: visualization.into() }
    }
}

impl Compare for Comparator {
    fn compare(&self, image1: &Path, image2: &Path, output: &Path) -> Result<Outcome> {
        let (img1, img2) = match (utils::imread(image1)?, utils::imread(image2)?) {
            (Some(img1), Some(img2)) => (img1, img2),
            _ => {
                error!("无法读取图片: {} {}", image1.display(), image2.display());
                return Ok(Outcome::LoadFailed);
            }
        };

        let img1 = utils::resize_exact(&img1, WORK_SIZE)?;
        let img2 = utils::resize_exact(&img2, WORK_SIZE)?;
        let gray1 = utils::to_gray(&img1)?;
        let gray2 = utils::to_gray(&img2)?;

        let mut orb = OrbDetector::create()?;
        let features1 = orb.detect_and_compute(&gray1)?;
        let features2 = orb.detect_and_compute(&gray2)?;
        debug!("特征点数量: {} {}", features1.len(), features2.len());

        if !features1.has_descriptors() || !features2.has_descriptors() {
            info!("至少一张图片没有找到描述符");
            utils::write_atomic(output, NO_DESCRIPTORS_RESULT)?;
            print!("{}", NO_DESCRIPTORS_RESULT);
            return Ok(Outcome::NoDescriptors);
        }

        let matches = cross_check_match(&features1.descriptors, &features2.descriptors)?;
        debug!("交叉检验后的匹配数量: {}", matches.len());

        let identical = utils::same_pixels(&img1, &img2)?;
        let percentage =
            match_percentage(identical, matches.len(), features1.len(), features2.len());

        utils::write_atomic(output, &format_score(percentage))?;
        println!("Feature Match Percentage: {:.2} %", percentage);

        let top = &matches[..matches.len().min(DRAW_MATCHES)];
        let canvas = utils::draw_matches(&img1, &features1.keypoints, &img2, &features2.keypoints, top)?;
        let canvas = utils::resize_exact(&canvas, CANVAS_SIZE)?;
        utils::imwrite(&self.visualization, &canvas)?;
        info!("匹配可视化已保存到 {}", self.visualization.display());

        Ok(Outcome::Scored { percentage, matches })
    }
}
