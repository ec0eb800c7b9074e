//! Centralized style constants for consistent theming across the chat widget

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Header bar in the Tata Motors brand blue
pub const HEADER_COLORS: &str = "bg-[#1b3f8f] text-white";

// Message bubble styles
pub const USER_BUBBLE_COLORS: &str = "bg-blue-600 text-white self-end ml-10 md:ml-20";
pub const BOT_BUBBLE_COLORS: &str = "bg-white dark:bg-gray-700 self-start mr-10 md:mr-20 border border-gray-200 dark:border-gray-600";

// Input styles
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_3: &str = "flex flex-col gap-3";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Common spacing
pub const STANDARD_PADDING: &str = "p-4";
pub const HEADER_PADDING: &str = "px-4 py-3";

// Shadows and rounded corners
pub const CARD_SHADOW: &str = "shadow-md";
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";

/// Join style fragments with single spaces, skipping empty ones
pub fn combine_styles(styles: &[&str]) -> String {
    styles
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_styles_skips_empty() {
        assert_eq!(combine_styles(&["flex", "", "p-4"]), "flex p-4");
        assert_eq!(combine_styles(&[]), "");
    }
}
