//! 检测结果结构与置信度分级

use std::fmt;
use serde::{Deserialize, Serialize};

/// 置信度等级（由分数推导，不单独存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// 分数到等级的映射，0分不属于任何等级
    pub fn from_score(score: u32) -> Option<Self> {
        match score {
            0 => None,
            1..=39 => Some(ConfidenceTier::Low),
            40..=69 => Some(ConfidenceTier::Medium),
            _ => Some(ConfidenceTier::High),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Low => "Low",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单个厂商的检测命中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,
    pub score: u32,
}

impl Detection {
    pub fn tier(&self) -> ConfidenceTier {
        // score 恒大于0
        ConfidenceTier::from_score(self.score).unwrap_or(ConfidenceTier::Low)
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.tier(), self.score)
    }
}

/// 检测结果：按分数降序，分数相同保持规则声明顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    detections: Vec<Detection>,
}

impl DetectionResult {
    /// 由按声明顺序排列的命中构建，过滤0分并稳定排序
    pub fn from_catalog_order(detections: Vec<Detection>) -> Self {
        let mut detections: Vec<Detection> =
            detections.into_iter().filter(|d| d.score > 0).collect();
        detections.sort_by(|a, b| b.score.cmp(&a.score));
        Self { detections }
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn names(&self) -> Vec<String> {
        self.detections.iter().map(|d| d.name.clone()).collect()
    }

    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.detections.iter().find(|d| d.name == name).map(|d| d.score)
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }
}
