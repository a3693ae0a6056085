use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use opencv::core::{self, DMatch, KeyPoint, Mat, Size, Vector};
use opencv::prelude::*;
use opencv::{features2d, imgcodecs, imgproc};

use crate::matcher::Match;

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| anyhow!("路径不是合法的 UTF-8: {}", path.display()))
}

/// 以彩色模式读取图片，路径无法交给 OpenCV、读取或解码失败时返回 None
pub fn imread(path: &Path) -> Result<Option<Mat>> {
    let Ok(path) = path_str(path) else {
        return Ok(None);
    };
    let img = match imgcodecs::imread(path, imgcodecs::IMREAD_COLOR) {
        Ok(img) => img,
        Err(_) => return Ok(None),
    };
    Ok((!img.empty()).then_some(img))
}

pub fn imwrite(path: &Path, img: &impl core::ToInputArray) -> Result<()> {
    let flags = Vector::<i32>::new();
    if !imgcodecs::imwrite(path_str(path)?, img, &flags)? {
        bail!("无法写入图片: {}", path.display());
    }
    Ok(())
}

/// 缩放到指定尺寸，不保持长宽比
pub fn resize_exact(img: &impl core::ToInputArray, (width, height): (i32, i32)) -> Result<Mat> {
    let mut output = Mat::default();
    imgproc::resize(
        img,
        &mut output,
        Size::new(width, height),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;
    Ok(output)
}

pub fn to_gray(img: &impl core::ToInputArray) -> Result<Mat> {
    let mut output = Mat::default();
    imgproc::cvt_color_def(img, &mut output, imgproc::COLOR_BGR2GRAY)?;
    Ok(output)
}

/// 两张图片的尺寸、类型以及像素是否完全相同
pub fn same_pixels(a: &Mat, b: &Mat) -> Result<bool> {
    if a.size()? != b.size()? || a.typ() != b.typ() {
        return Ok(false);
    }
    let (a, b) = (a.try_clone()?, b.try_clone()?);
    Ok(a.data_bytes()? == b.data_bytes()?)
}

/// 将两张图片左右拼接，并用连线标出给定的匹配
pub fn draw_matches(
    img1: &Mat,
    keypoints1: &Vector<KeyPoint>,
    img2: &Mat,
    keypoints2: &Vector<KeyPoint>,
    matches: &[Match],
) -> Result<Mat> {
    let matches = matches
        .iter()
        .map(|m| DMatch::new(m.query as i32, m.train as i32, m.distance as f32))
        .collect::<opencv::Result<Vector<DMatch>>>()?;
    let mut output = Mat::default();
    features2d::draw_matches_def(img1, keypoints1, img2, keypoints2, &matches, &mut output)?;
    Ok(output)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// 先写入临时文件再重命名，避免读到写了一半的内容
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents).with_context(|| format!("无法写入 {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("无法重命名到 {}", path.display()))?;
    Ok(())
}

/// [`write_atomic`] 的异步版本
pub async fn write_atomic_async(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, contents)
        .await
        .with_context(|| format!("无法写入 {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("无法重命名到 {}", path.display()))?;
    Ok(())
}
