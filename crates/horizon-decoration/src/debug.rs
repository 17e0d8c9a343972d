//! Debug rendering of button groups.
//!
//! [`ButtonGroupDebug`] prints a group and its members as a small tree, which
//! is handy in logs when a title bar lays out unexpectedly:
//!
//! ```text
//! Group [Right] (0, 0) 49x8 spacing=2
//! ├── Close (0, 0) 10x5 enabled
//! ├── Minimize (12, 0) 20x8 enabled pressed
//! └── Maximize (34, 0) 15x6 hidden
//! ```

use crate::button::DecorationButton;
use crate::button_group::DecorationButtonGroup;
use crate::geometry::Rect;

/// Style of tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for group debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show button handles.
    pub show_ids: bool,
    /// Whether to list each button's state flags.
    pub show_state: bool,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_state: true,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_ids: true,
            ..Default::default()
        }
    }

    /// Options for minimal output: types and geometry only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_state: false,
            ..Default::default()
        }
    }
}

/// Renders a [`DecorationButtonGroup`] as a tree.
#[derive(Debug, Clone, Default)]
pub struct ButtonGroupDebug {
    options: TreeFormatOptions,
}

impl ButtonGroupDebug {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Render `group` and its live members.
    pub fn format(&self, group: &DecorationButtonGroup) -> String {
        let mut output = String::from("Group");
        if let Some(position) = group.position() {
            output.push_str(&format!(" [{position:?}]"));
        }
        output.push_str(&format!(
            " {} spacing={}\n",
            format_rect(group.geometry()),
            group.spacing()
        ));

        let buttons: Vec<_> = group
            .decoration()
            .map(|decoration| {
                group
                    .buttons()
                    .into_iter()
                    .filter_map(|id| decoration.button(id))
                    .collect()
            })
            .unwrap_or_default();

        if buttons.is_empty() {
            output.push_str("  (empty)\n");
        }
        let count = buttons.len();
        for (index, button) in buttons.iter().enumerate() {
            output.push_str(self.branch(index + 1 == count));
            output.push_str(&self.format_button(button));
            output.push('\n');
        }
        output
    }

    fn branch(&self, is_last: bool) -> &'static str {
        match (self.options.style, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    fn format_button(&self, button: &DecorationButton) -> String {
        let mut line = format!("{:?}", button.button_type());
        if self.options.show_ids {
            line.push_str(&format!(" [{:?}]", button.id()));
        }
        line.push(' ');
        line.push_str(&format_rect(button.geometry()));

        if self.options.show_state {
            let flags = [
                (!button.is_visible(), "hidden"),
                (button.is_enabled(), "enabled"),
                (button.is_hovered(), "hovered"),
                (button.is_pressed(), "pressed"),
                (button.is_checked(), "checked"),
            ];
            for (set, name) in flags {
                if set {
                    line.push(' ');
                    line.push_str(name);
                }
            }
        }
        line
    }
}

fn format_rect(rect: Rect) -> String {
    format!("({}, {}) {}x{}", rect.left(), rect.top(), rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::button::DecorationButtonType;
    use crate::button_group::Position;
    use crate::client::{ClientRequest, DecoratedClient, WindowBridge};
    use crate::decoration::Decoration;
    use crate::settings::DecorationSettings;

    struct NullBridge;

    impl WindowBridge for NullBridge {
        fn request(&self, _client: &DecoratedClient, _request: ClientRequest) {}
    }

    fn group() -> Arc<DecorationButtonGroup> {
        let client = DecoratedClient::new(NullBridge);
        client.set_closeable(true);
        let settings = Arc::new(DecorationSettings::with_buttons(
            Vec::new(),
            vec![DecorationButtonType::Minimize, DecorationButtonType::Close],
        ));
        let decoration = Decoration::new(client, settings);
        DecorationButtonGroup::with_position(Position::Right, &decoration, |button_type, decoration| {
            let id = decoration.create_button(button_type);
            decoration
                .button(id)?
                .set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
            Some(id)
        })
    }

    #[test]
    fn test_format_unicode() {
        let group = group();
        let output = ButtonGroupDebug::new().format(&group);
        assert_eq!(
            output,
            "Group [Right] (0, 0) 20x10 spacing=0\n\
             \u{251c}\u{2500}\u{2500} Minimize (0, 0) 10x10\n\
             \u{2514}\u{2500}\u{2500} Close (10, 0) 10x10 enabled\n"
        );
    }

    #[test]
    fn test_format_ascii_minimal() {
        let group = group();
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        };
        let output = ButtonGroupDebug::with_options(options).format(&group);
        assert!(output.contains("+-- Minimize (0, 0) 10x10\n"));
        assert!(output.contains("`-- Close (10, 0) 10x10\n"));
    }

    #[test]
    fn test_format_empty_group() {
        let decoration = Decoration::new(DecoratedClient::new(NullBridge), DecorationSettings::new());
        let group = DecorationButtonGroup::new(&decoration);
        let output = ButtonGroupDebug::new().format(&group);
        assert_eq!(output, "Group (0, 0) 0x0 spacing=0\n  (empty)\n");
    }
}
