/// 任意一张图片没有描述符时写入的结果
pub const NO_DESCRIPTORS_RESULT: &str = "Feature Match Percentage: 0.00%\n";

/// 计算匹配百分比
///
/// 两张图片缩放后逐像素相同时直接返回 100；否则为匹配数除以较少一方的特征点数。
/// 结果不做上限截断，匹配数多于较少一方的特征点数时会超过 100。
pub fn match_percentage(identical: bool, matches: usize, kps_a: usize, kps_b: usize) -> f64 {
    let total = kps_a.min(kps_b);
    if identical {
        100.0
    } else if total > 0 {
        matches as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// 格式化写入结果文件的内容
pub fn format_score(percentage: f64) -> String {
    format!("{:.2} %\n", percentage)
}
