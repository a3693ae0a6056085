use anyhow::Result;
use opencv::core::{self, DMatch, Mat, Vector};
use opencv::features2d::BFMatcher;
use opencv::prelude::*;

/// 一对匹配的特征点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// 图片 A 中的特征点索引
    pub query: usize,
    /// 图片 B 中的特征点索引
    pub train: usize,
    /// 描述符的汉明距离
    pub distance: u32,
}

impl From<DMatch> for Match {
    fn from(m: DMatch) -> Self {
        Self { query: m.query_idx as usize, train: m.train_idx as usize, distance: m.distance as u32 }
    }
}

/// 使用汉明距离暴力匹配两组 ORB 描述符，并进行交叉检验
///
/// 只有当 A[i] 的最近邻是 B[j]，且 B[j] 的最近邻也是 A[i] 时才保留这一对。
/// 返回结果按距离升序排列，距离相同时保持 OpenCV 给出的顺序。
pub fn cross_check_match(des_a: &Mat, des_b: &Mat) -> Result<Vec<Match>> {
    if des_a.empty() || des_b.empty() {
        return Ok(vec![]);
    }

    let matcher = BFMatcher::new(core::NORM_HAMMING, true)?;
    let mut matches = Vector::<DMatch>::new();
    let mask = Mat::default();
    matcher.train_match(des_a, des_b, &mut matches, &mask)?;

    let mut matches: Vec<Match> = matches.iter().map(Match::from).collect();
    matches.sort_by_key(|m| m.distance);
    Ok(matches)
}
