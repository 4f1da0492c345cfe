//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# PanelGUI Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "panelgui-green"   # panelgui-green, midnight, paper, or a path to a .yaml theme

[container]
# width = 480             # 120-10000
# height = 360            # 80-10000

[panel]
# x = 120                 # 0-10000
# y = 120                 # 0-10000
# width = 320             # 120-10000
# height = 220            # 80-10000
# z_base = 10000
# show_close_button = true

[style]
# header_bg = "#2ecc71"
# body_text = "#222"
# header_text = "#fff"
# body_bg = "#fff"

[widgets]
# button_label = "Button"
# slider_label = "Slider"
# slider_min = 0.0
# slider_max = 100.0
# dropdown_label = "Choose"
# dropdown_options = ["Option 1", "Option 2"]
# checkbox_label = "Check"
# text_placeholder = "Type..."
# number_placeholder = "0"
# markup = "<b>HTML</b>"

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
