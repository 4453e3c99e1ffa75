//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[gemini]
# The API key is read from GEMINI_API_KEY (or GOOGLE_API_KEY).
# api_key = ""
# model = "gemini-2.0-flash"
# max_tokens = 4096      # 1-65536
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 120     # 5-600

[session]
# context_window = 5     # prior turns sent with each request, 0-50
# include_timestamp = true
# welcome_message = "Hi! I'm Parley."

[personas]
# default = "all-in-one" # all-in-one, image-gen, or a custom id

# [[personas.custom]]
# id = "pirate"
# display_name = "Pirate"
# short_description = "Talks like a pirate."
# emoji = "🏴‍☠️"
# system_instruction = "Answer every question like a pirate."

[storage]
# directory = "/path/to/session"  # defaults to the platform data directory
# ephemeral = false

[logging]
# level = "warn"         # trace, debug, info, warn, error
"##
    .to_string()
}
