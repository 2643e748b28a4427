use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gap::classify::{DEFAULT_MODERATE_THRESHOLD_KG, DEFAULT_SEVERE_THRESHOLD_KG};
use crate::gap::{
    AnalysisOptions, AveragePolicy, BandThresholds, ClassificationPolicy, ClassificationScheme,
    ThresholdError,
};
use crate::output::OutputFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub scheme: ClassificationScheme,
    #[serde(default = "default_severe_threshold")]
    pub severe_threshold: f64,
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub average: AveragePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub scheme: Option<ClassificationScheme>,
    pub severe_threshold: Option<f64>,
    pub moderate_threshold: Option<f64>,
    pub average: Option<AveragePolicy>,
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/supply-gap/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(scheme) = overrides.scheme {
            self.classification.scheme = scheme;
        }
        if let Some(severe) = overrides.severe_threshold {
            self.classification.severe_threshold = severe;
        }
        if let Some(moderate) = overrides.moderate_threshold {
            self.classification.moderate_threshold = moderate;
        }
        if let Some(average) = overrides.average {
            self.summary.average = average;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
    }

    /// Thresholds are validated under either scheme.
    pub fn classification_policy(&self) -> Result<ClassificationPolicy, ThresholdError> {
        let bands = BandThresholds::new(
            self.classification.severe_threshold,
            self.classification.moderate_threshold,
        )?;
        Ok(match self.classification.scheme {
            ClassificationScheme::Banded => ClassificationPolicy::Banded(bands),
            ClassificationScheme::SignOnly => ClassificationPolicy::SignOnly,
        })
    }

    pub fn analysis_options(&self) -> Result<AnalysisOptions, ThresholdError> {
        Ok(AnalysisOptions {
            classification: self.classification_policy()?,
            average: self.summary.average,
        })
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"[classification]
# "banded" (five status bands) or "sign_only" (matched / undersupply / oversupply)
scheme = "banded"
severe_threshold = 20.0
moderate_threshold = 5.0

[summary]
# "aggregate_ratio" (net gap / total forecast) or "mean_of_records"
average = "aggregate_ratio"

[output]
format = "table"
"#;
        template.to_string()
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            scheme: ClassificationScheme::default(),
            severe_threshold: default_severe_threshold(),
            moderate_threshold: default_moderate_threshold(),
        }
    }
}

fn default_severe_threshold() -> f64 {
    DEFAULT_SEVERE_THRESHOLD_KG
}

fn default_moderate_threshold() -> f64 {
    DEFAULT_MODERATE_THRESHOLD_KG
}
