//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Visitor Globe Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[presence]
# enabled = true
# host = "localhost:1999"     # relay host[:port], no scheme
# party = "main"
# room = "globe"
# secure = false              # wss:// when true
# reconnect_delay_secs = 1     # 1-60
# max_reconnect_delay_secs = 30
# connect_timeout_secs = 15    # 1-120

[globe]
# width = 1200                 # device pixels, 1-8192
# height = 1200
# device_pixel_ratio = 2.0     # 0.5-4.0
# phi = 0.0                    # initial rotation, radians
# theta = 0.3                  # tilt, -1.57-1.57
# dark = 1.0                   # 0.0-1.0
# diffuse = 1.2                # 0.0-10.0
# map_samples = 16000          # 100-100000
# map_brightness = 6.0         # 0.0-20.0
# base_color = "#4d4d4d"
# marker_color = "#1accff"
# glow_color = "#ffffff"
# rotation_step = 0.01         # radians per frame, 0.0001-1.0

[render]
# frame_rate = 60              # 1-240
# headless = false
# columns = 80                 # terminal surface, 20-400
# rows = 40                    # 10-200

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
