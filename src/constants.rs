/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Placeholder replaced by the transformed SVG markup
pub const SVG_PLACEHOLDER: &str = "%svg%";

/// Placeholder replaced by the component name
pub const NAME_PLACEHOLDER: &str = "%name%";

/// Placeholder replaced by the comma separated list of used tags
pub const TAGS_PLACEHOLDER: &str = "%tags%";

/// Root element name, already imported by every template
pub const ROOT_TAG: &str = "Svg";

/// Token forwarding all component properties to the root element
pub const PROPS_TOKEN: &str = "{...props}";

/// Attributes removed from the opening `<svg>` tag
pub const STRIPPED_PROPERTIES: [&str; 6] =
    ["version", "id", "xmlns", "xmlns:xlink", "xml:space", "style"];

/// Extension of every generated component file
pub const OUTPUT_EXTENSION: &str = "tsx";

/// Help text for the input folder option
pub const INPUT_HELP: &str = "Folder containing the SVG files to convert";

/// Help text for the output folder option
pub const OUTPUT_HELP: &str = "Folder receiving the generated components";

/// Help text for the move folder option
pub const MOVE_HELP: &str = "Folder receiving the original SVG files after a successful conversion";

/// Help text for the suffix option
pub const SUFFIX_HELP: &str = "Suffix appended to every component name";

/// Help text for the tab size option
pub const TAB_SIZE_HELP: &str = "Number of spaces per indentation level";

/// Help text for the template option
pub const TEMPLATE_HELP: &str = "Template file containing %svg%, %name% and %tags% placeholders";

/// Help text for the overwrite option
pub const OVERWRITE_HELP: &str = "Overwrite existing components and moved files";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a YAML file (command-line values take precedence)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing or moving any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Message printed before the conversion starts
pub const START_BANNER: &str = "Converting SVG files to react-native-svg components...";
