use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OutputError;

/// Categories of PDF operations whose results are managed by this crate.
///
/// The variant name in lowercase doubles as the directory segment under the
/// base output directory and as the default filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Compressed,
    Merged,
    Protected,
    Unprotected,
    Watermarked,
    Converted,
    Split,
}

impl OutputType {
    /// All supported output types, in display order
    pub const ALL: [OutputType; 7] = [
        OutputType::Compressed,
        OutputType::Merged,
        OutputType::Protected,
        OutputType::Unprotected,
        OutputType::Watermarked,
        OutputType::Converted,
        OutputType::Split,
    ];

    /// Directory segment used to namespace outputs of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Compressed => "compressed",
            OutputType::Merged => "merged",
            OutputType::Protected => "protected",
            OutputType::Unprotected => "unprotected",
            OutputType::Watermarked => "watermarked",
            OutputType::Converted => "converted",
            OutputType::Split => "split",
        }
    }

    /// Filename suffix applied when no custom suffix is given
    pub fn default_suffix(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compressed" => Ok(OutputType::Compressed),
            "merged" => Ok(OutputType::Merged),
            "protected" => Ok(OutputType::Protected),
            "unprotected" => Ok(OutputType::Unprotected),
            "watermarked" => Ok(OutputType::Watermarked),
            "converted" => Ok(OutputType::Converted),
            "split" => Ok(OutputType::Split),
            _ => Err(OutputError::invalid_output_type(s)),
        }
    }
}
