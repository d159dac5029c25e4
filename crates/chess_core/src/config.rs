use crate::position::PositionSpec;

pub const DEFAULT_CONTAINER: &str = "#board";

/// Fully resolved board configuration.
///
/// Defaults: container `#board`, the starting position, notation hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Selector of the hosting container.
    pub container: String,
    pub position: PositionSpec,
    pub show_notation: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            position: PositionSpec::starting(),
            show_notation: false,
        }
    }
}

/// Caller-supplied options; anything left `None` falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardOptions {
    pub container: Option<String>,
    pub position: Option<PositionSpec>,
    pub show_notation: Option<bool>,
}

impl BoardOptions {
    pub fn container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn position(mut self, position: PositionSpec) -> Self {
        self.position = Some(position);
        self
    }

    pub fn show_notation(mut self, show: bool) -> Self {
        self.show_notation = Some(show);
        self
    }
}

impl BoardConfig {
    pub fn from_options(options: &BoardOptions) -> Self {
        let defaults = Self::default();
        Self {
            container: options.container.clone().unwrap_or(defaults.container),
            position: options.position.clone().unwrap_or(defaults.position),
            show_notation: options.show_notation.unwrap_or(defaults.show_notation),
        }
    }
}

impl From<BoardOptions> for BoardConfig {
    fn from(options: BoardOptions) -> Self {
        Self::from_options(&options)
    }
}
