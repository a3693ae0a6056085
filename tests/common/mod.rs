#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use artmatch::utils;
use opencv::core::{CV_8UC1, Mat, Scalar};
use opencv::prelude::*;
use rand::prelude::*;

pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 600;

/// 纯色图片，ORB 在上面找不到任何特征点
pub fn blank_image(path: &Path, value: f64) -> Result<PathBuf> {
    let img = Mat::new_rows_cols_with_default(HEIGHT, WIDTH, CV_8UC1, Scalar::all(value))?;
    utils::imwrite(path, &img)?;
    Ok(path.to_path_buf())
}

/// 由随机灰度色块组成的图片，纹理丰富
pub fn textured_image(path: &Path, seed: u64) -> Result<PathBuf> {
    const BLOCK: usize = 8;
    let mut rng = StdRng::seed_from_u64(seed);
    let cells: Vec<u8> = (0..(WIDTH as usize / BLOCK) * (HEIGHT as usize / BLOCK))
        .map(|_| rng.random())
        .collect();

    let mut img = Mat::new_rows_cols_with_default(HEIGHT, WIDTH, CV_8UC1, Scalar::all(0.))?;
    let data = img.data_bytes_mut()?;
    for (i, px) in data.iter_mut().enumerate() {
        let (row, col) = (i / WIDTH as usize, i % WIDTH as usize);
        *px = cells[(row / BLOCK) * (WIDTH as usize / BLOCK) + col / BLOCK];
    }
    utils::imwrite(path, &img)?;
    Ok(path.to_path_buf())
}
