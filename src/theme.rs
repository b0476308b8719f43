use serde::Deserialize;

use crate::utils::config::*;

/// Theme consumed by the search bar stylesheet. Defaults follow the
/// Material light theme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Base spacing unit in pixels
    pub spacing: i32,
    pub palette: Palette,
    pub transitions: Transitions,
    pub shape: Shape,
    /// `box-shadow` of the paper surface
    pub paper_shadow: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Colour of active icons
    pub action_active: String,
    /// Colour of disabled icons
    pub action_disabled: String,
    pub background_paper: String,
    pub text_primary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transitions {
    pub shorter_ms: u32,
    pub ease_in_out: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Shape {
    pub border_radius: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            spacing: 8,
            palette: Palette::default(),
            transitions: Transitions::default(),
            shape: Shape::default(),
            paper_shadow: "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            action_active: "rgba(0, 0, 0, 0.54)".to_string(),
            action_disabled: "rgba(0, 0, 0, 0.26)".to_string(),
            background_paper: "#fff".to_string(),
            text_primary: "rgba(0, 0, 0, 0.87)".to_string(),
        }
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self {
            shorter_ms: 200,
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self { border_radius: 4 }
    }
}

impl Theme {
    /// Multiple of the spacing unit, in pixels
    pub fn spacing(&self, factor: i32) -> i32 {
        self.spacing * factor
    }

    /// CSS `transition` value animating `properties` with the shorter duration
    pub fn transition(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}ms {} 0ms",
                    property, self.transitions.shorter_ms, self.transitions.ease_in_out
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Stylesheet for the search bar class names
    pub fn stylesheet(&self) -> String {
        let icon_button_transition = self.transition(&["transform", "color"]);
        let icon_transition = self.transition(&["opacity"]);

        format!(
            r#".{ROOT_CLASS} {{
  height: {height}px;
  display: flex;
  justify-content: space-between;
  background-color: {paper};
  color: {text};
  border-radius: {radius}px;
  box-shadow: {shadow};
}}
.{ICON_BUTTON_CLASS} {{
  color: {active};
  transform: scale(1, 1);
  transition: {icon_button_transition};
  display: inline-flex;
  align-items: center;
  justify-content: center;
  flex: 0 0 auto;
  padding: {button_padding}px;
  border: 0;
  border-radius: 50%;
  background: none;
  cursor: pointer;
}}
.{ICON_BUTTON_CLASS}:disabled {{
  color: {disabled};
  cursor: default;
}}
.{ICON_BUTTON_HIDDEN_CLASS} {{
  transform: scale(0, 0);
}}
.{ICON_BUTTON_HIDDEN_CLASS} > .{ICON_CLASS} {{
  opacity: 0;
}}
.{SEARCH_ICON_BUTTON_CLASS} {{
  margin-right: {search_margin}px;
}}
.{ICON_CLASS} {{
  display: inline-flex;
  transition: {icon_transition};
}}
.{INPUT_CLASS} {{
  width: 100%;
  border: 0;
  outline: 0;
  background: none;
  font: inherit;
  color: inherit;
}}
.{SEARCH_CONTAINER_CLASS} {{
  margin: auto 16px;
  width: calc(100% - {container_offset}px);
}}
"#,
            height = self.spacing(6),
            paper = self.palette.background_paper,
            text = self.palette.text_primary,
            radius = self.shape.border_radius,
            shadow = self.paper_shadow,
            active = self.palette.action_active,
            disabled = self.palette.action_disabled,
            button_padding = self.spacing(6) / 4,
            search_margin = self.spacing(-6),
            container_offset = self.spacing(6 + 4),
        )
    }
}
