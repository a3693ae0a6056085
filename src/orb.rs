use anyhow::{Result, bail};
use opencv::core::{KeyPoint, Mat, Ptr, Vector};
use opencv::features2d::ORB;
use opencv::prelude::*;

/// 一张图片上检测到的特征点及其描述符，两者一一对应
pub struct Features {
    pub keypoints: Vector<KeyPoint>,
    /// 每行一个 32 字节的描述符，没有特征点时为空
    pub descriptors: Mat,
}

impl Features {
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    pub fn has_descriptors(&self) -> bool {
        !self.descriptors.empty()
    }
}

/// 使用 OpenCV 默认参数的 ORB 特征提取器
pub struct OrbDetector {
    orb: Ptr<ORB>,
}

impl OrbDetector {
    pub fn create() -> Result<Self> {
        Ok(Self { orb: ORB::create_def()? })
    }

    pub fn detect_and_compute(&mut self, image: &Mat) -> Result<Features> {
        let mask = Mat::default();
        let mut keypoints = Vector::<KeyPoint>::new();
        let mut descriptors = Mat::default();
        self.orb.detect_and_compute(image, &mask, &mut keypoints, &mut descriptors, false)?;

        if !descriptors.empty()
            && (descriptors.cols() != 32 || descriptors.typ() != opencv::core::CV_8UC1)
        {
            bail!(
                "ORB 描述符格式异常: {}x{} type={}",
                descriptors.rows(),
                descriptors.cols(),
                descriptors.typ()
            );
        }
        Ok(Features { keypoints, descriptors })
    }
}
