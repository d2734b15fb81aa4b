// 設定管理の具象実装

use crate::core::{handoff_delay, pipeline_interval, SandboxError, SandboxResult, ScenarioConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 利用可能なプリセット名
pub const PRESET_NAMES: [&str; 2] = ["default", "fast"];

/// デフォルト設定実装
///
/// JSON では全フィールドが省略可能で、省略した値はデフォルトのまま残る。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultScenarioConfig {
    time_unit_ms: u64,
    handoff_delay_units: u32,
    pipeline_capacity: usize,
    pipeline_items: usize,
    pipeline_interval_units: u32,
}

impl DefaultScenarioConfig {
    pub fn new(time_unit: Duration) -> Self {
        Self::default().with_time_unit(time_unit)
    }

    /// テスト・デモ向けの短い時間単位（10ms）
    pub fn fast() -> Self {
        Self::new(Duration::from_millis(10))
    }

    /// 名前からプリセットを取得
    pub fn preset(name: &str) -> SandboxResult<Self> {
        match name {
            "default" => Ok(Self::default()),
            "fast" => Ok(Self::fast()),
            _ => Err(SandboxError::configuration(format!(
                "無効なプリセット: {name}. 利用可能: {}",
                PRESET_NAMES.join(", ")
            ))),
        }
    }

    /// 時間単位を設定（ミリ秒単位に切り上げ）
    ///
    /// 1ms未満でも0にはならない。`Duration::ZERO` は `validate` で拒否される。
    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        let millis = time_unit.as_micros().div_ceil(1000);
        self.time_unit_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    pub fn with_handoff_delay_units(mut self, units: u32) -> Self {
        self.handoff_delay_units = units;
        self
    }

    pub fn with_pipeline_capacity(mut self, capacity: usize) -> Self {
        self.pipeline_capacity = capacity;
        self
    }

    pub fn with_pipeline_items(mut self, items: usize) -> Self {
        self.pipeline_items = items;
        self
    }

    pub fn with_pipeline_interval_units(mut self, units: u32) -> Self {
        self.pipeline_interval_units = units;
        self
    }

    /// JSON文字列から設定を読み込む
    pub fn from_json(json: &str) -> SandboxResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SandboxError::configuration(format!("JSON解析エラー: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから設定を読み込む
    pub fn from_json_file(path: impl AsRef<Path>) -> SandboxResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SandboxError::config_file(path, e.into()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| SandboxError::config_file(path, e.into()))?;
        config.validate()?;
        Ok(config)
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> SandboxResult<()> {
        if self.time_unit_ms == 0 {
            return Err(SandboxError::validation(
                "time_unit_ms",
                "1ms以上を指定してください",
            ));
        }
        // 受信側の出力が送信側の完了通知より先に出るには遅延が必要
        if self.handoff_delay_units == 0 {
            return Err(SandboxError::validation(
                "handoff_delay_units",
                "1以上を指定してください",
            ));
        }
        handoff_delay(self)?;
        pipeline_interval(self)?;
        if self.pipeline_items == 0 {
            return Err(SandboxError::validation(
                "pipeline_items",
                "1以上を指定してください",
            ));
        }
        Ok(())
    }
}

impl Default for DefaultScenarioConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: 1000,
            handoff_delay_units: 5,
            pipeline_capacity: 3,
            pipeline_items: 3,
            pipeline_interval_units: 1,
        }
    }
}

impl ScenarioConfig for DefaultScenarioConfig {
    fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    fn handoff_delay_units(&self) -> u32 {
        self.handoff_delay_units
    }

    fn pipeline_capacity(&self) -> usize {
        self.pipeline_capacity
    }

    fn pipeline_items(&self) -> usize {
        self.pipeline_items
    }

    fn pipeline_interval_units(&self) -> u32 {
        self.pipeline_interval_units
    }
}
