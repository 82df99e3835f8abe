// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 30;
pub const MIN_LABEL_DISTANCE: f32 = 1.0;
pub const MAX_LABEL_DISTANCE: f32 = 5.0;

/// Output representation produced by the rendering backend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    /// Plain DOT source text; needs no external engine.
    Dot,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] =
        [OutputFormat::Png, OutputFormat::Svg, OutputFormat::Pdf, OutputFormat::Dot];

    /// The value passed to Graphviz `-T` and used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" => Ok(Self::Dot),
            _ => Err(UnknownOption { option: "output format", value: s.to_owned() }),
        }
    }
}

/// Graphviz layout engine used to position the graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEngine {
    /// Hierarchical (layered) layout.
    #[default]
    Dot,
    /// Force-directed ("spring") layout.
    Neato,
    Fdp,
    /// Multiscale force-directed layout for larger graphs.
    Sfdp,
    /// Radial layout.
    Twopi,
    /// Circular layout.
    Circo,
}

impl LayoutEngine {
    pub const ALL: [LayoutEngine; 6] = [
        LayoutEngine::Dot,
        LayoutEngine::Neato,
        LayoutEngine::Fdp,
        LayoutEngine::Sfdp,
        LayoutEngine::Twopi,
        LayoutEngine::Circo,
    ];

    /// The engine's binary name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
            Self::Twopi => "twopi",
            Self::Circo => "circo",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutEngine {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Self::Dot),
            "neato" => Ok(Self::Neato),
            "fdp" => Ok(Self::Fdp),
            "sfdp" => Ok(Self::Sfdp),
            "twopi" => Ok(Self::Twopi),
            "circo" => Ok(Self::Circo),
            _ => Err(UnknownOption { option: "layout engine", value: s.to_owned() }),
        }
    }
}

/// Compass anchor for edge labels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    #[default]
    Center,
}

impl LabelPosition {
    pub const ALL: [LabelPosition; 9] = [
        LabelPosition::North,
        LabelPosition::NorthEast,
        LabelPosition::East,
        LabelPosition::SouthEast,
        LabelPosition::South,
        LabelPosition::SouthWest,
        LabelPosition::West,
        LabelPosition::NorthWest,
        LabelPosition::Center,
    ];

    /// The Graphviz compass value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
            Self::Center => "c",
        }
    }

    /// A human-readable name for front-end pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::North => "Top",
            Self::NorthEast => "Top-Right",
            Self::East => "Right",
            Self::SouthEast => "Bottom-Right",
            Self::South => "Bottom",
            Self::SouthWest => "Bottom-Left",
            Self::West => "Left",
            Self::NorthWest => "Top-Left",
            Self::Center => "Center",
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelPosition {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::North),
            "ne" => Ok(Self::NorthEast),
            "e" => Ok(Self::East),
            "se" => Ok(Self::SouthEast),
            "s" => Ok(Self::South),
            "sw" => Ok(Self::SouthWest),
            "w" => Ok(Self::West),
            "nw" => Ok(Self::NorthWest),
            "c" => Ok(Self::Center),
            _ => Err(UnknownOption { option: "label position", value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    option: &'static str,
    value: String,
}

impl UnknownOption {
    pub fn option(&self) -> &'static str {
        self.option
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.option, self.value)
    }
}

impl std::error::Error for UnknownOption {}

/// Pass-through rendering configuration.
///
/// The enumerated fields are closed sets by construction; `validate`
/// checks the two numeric ranges the front end would otherwise clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    format: OutputFormat,
    engine: LayoutEngine,
    font_size: u32,
    label_distance: f32,
    label_position: LabelPosition,
    prune_unconnected: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            engine: LayoutEngine::default(),
            font_size: 12,
            label_distance: 1.5,
            label_position: LabelPosition::default(),
            prune_unconnected: false,
        }
    }
}

impl RenderOptions {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_label_distance(mut self, label_distance: f32) -> Self {
        self.label_distance = label_distance;
        self
    }

    pub fn with_label_position(mut self, label_position: LabelPosition) -> Self {
        self.label_position = label_position;
        self
    }

    /// When set, nodes referenced by no connection are skipped, unless the
    /// diagram has no connections at all (then every node is drawn).
    pub fn with_prune_unconnected(mut self, prune_unconnected: bool) -> Self {
        self.prune_unconnected = prune_unconnected;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn label_distance(&self) -> f32 {
        self.label_distance
    }

    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    pub fn prune_unconnected(&self) -> bool {
        self.prune_unconnected
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(OptionsError::FontSizeOutOfRange { font_size: self.font_size });
        }
        if !(MIN_LABEL_DISTANCE..=MAX_LABEL_DISTANCE).contains(&self.label_distance) {
            return Err(OptionsError::LabelDistanceOutOfRange {
                label_distance: self.label_distance,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionsError {
    FontSizeOutOfRange { font_size: u32 },
    LabelDistanceOutOfRange { label_distance: f32 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontSizeOutOfRange { font_size } => write!(
                f,
                "font size {font_size} is out of range ({MIN_FONT_SIZE}..={MAX_FONT_SIZE})"
            ),
            Self::LabelDistanceOutOfRange { label_distance } => write!(
                f,
                "label distance {label_distance} is out of range ({MIN_LABEL_DISTANCE}..={MAX_LABEL_DISTANCE})"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}
