//! Library-level behavior of the stylesheet → theme literal transformation.

use themegrab::{extract_colors, locate_block, render, OutputFormat, ThemeSet};

fn literal(css: &str) -> String {
    render(&ThemeSet::from_stylesheet(css), OutputFormat::Literal).unwrap()
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn light_and_dark_example() {
    let css = "\
:root {
  --background: hsl(0 0% 100%);
  --primary: hsl(221.2 83.2% 53.3%);
}
.dark {
  --background: hsl(222.2 84% 4.9%);
}
";
    let expected = "    light: {
      colors: {
        background: { h: 0, s: 0, l: 100 },
        primary: { h: 221.2, s: 83.2, l: 53.3 },
      },
    },
    dark: {
      colors: {
        background: { h: 222.2, s: 84, l: 4.9 },
      },
    },
";
    assert_eq!(literal(css), expected);
}

#[test]
fn realistic_stylesheet() {
    let css = r#"
@tailwind base;

@layer base {
  :root {
    --background: hsl(0 0% 100%);
    --foreground: hsl(222.2 84% 4.9%);
    --card-foreground: hsl(222.2 84% 4.9%);
    --radius: 0.5rem;
    --chart-1: hsl(12 76% 61%);
    --sidebar-accent-foreground: hsl(240 5.9% 10%);
    --shadow-color: hsl(220 3% 15%);
    --font-sans: hsl(1 1% 1%);
  }

  .dark {
    --background: hsl(222.2 84% 4.9%);
    --destructive: hsl(0 62.8% 30.6%);
    --ring: hsl(212.7 26.8% 83.9%);
  }
}

body {
  color: hsl(var(--foreground));
}
"#;
    let expected = "    light: {
      colors: {
        background: { h: 0, s: 0, l: 100 },
        foreground: { h: 222.2, s: 84, l: 4.9 },
        cardForeground: { h: 222.2, s: 84, l: 4.9 },
        chart1: { h: 12, s: 76, l: 61 },
        sidebarAccentForeground: { h: 240, s: 5.9, l: 10 },
        shadowColor: { h: 220, s: 3, l: 15 },
      },
    },
    dark: {
      colors: {
        background: { h: 222.2, s: 84, l: 4.9 },
        destructive: { h: 0, s: 62.8, l: 30.6 },
        ring: { h: 212.7, s: 26.8, l: 83.9 },
      },
    },
";
    assert_eq!(literal(css), expected);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn primary_token_lands_in_light_group() {
    let out = literal(":root { --primary: hsl(200 50% 40%); }");
    assert!(out.starts_with("    light: {\n      colors: {\n"));
    assert!(out.contains("primary: { h: 200, s: 50, l: 40 }"));
}

#[test]
fn disallowed_category_is_dropped_in_every_theme() {
    let css = ":root { --radius: hsl(0 0% 0%); }\n.dark { --radius: hsl(0 0% 0%); }";
    let out = literal(css);
    assert!(!out.contains("radius"));
    assert!(out.contains("light: {"));
    assert!(out.contains("dark: {"));
}

#[test]
fn multi_segment_names_are_camel_cased() {
    let css = ":root { --chart-one: hsl(1 1% 1%); --sidebar-accent-foreground: hsl(2 2% 2%); }";
    let out = literal(css);
    assert!(out.contains("        chartOne: { h: 1, s: 1, l: 1 },\n"));
    assert!(out.contains("        sidebarAccentForeground: { h: 2, s: 2, l: 2 },\n"));
}

#[test]
fn missing_dark_block_has_no_dark_group() {
    let out = literal(":root { --primary: hsl(200 50% 40%); }");
    assert!(!out.contains("dark"));
}

#[test]
fn missing_light_block_has_no_light_group() {
    let out = literal(".dark { --primary: hsl(200 50% 40%); }");
    assert!(!out.contains("light"));
    assert!(out.starts_with("    dark: {"));
}

#[test]
fn source_order_is_preserved() {
    let css = ":root { --foreground: hsl(0 0% 0%); --background: hsl(0 0% 100%); }";
    let out = literal(css);
    let fg = out.find("foreground:").unwrap();
    let bg = out.find("background:").unwrap();
    assert!(fg < bg);
}

#[test]
fn light_renders_before_dark_regardless_of_input_order() {
    let css = ".dark { --ring: hsl(1 1% 1%); }\n:root { --ring: hsl(2 2% 2%); }";
    let out = literal(css);
    assert!(out.find("light:").unwrap() < out.find("dark:").unwrap());
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(literal(""), "");
}

#[test]
fn input_without_blocks_is_empty_output() {
    assert_eq!(literal("body { color: red; }\n--primary: hsl(1 1% 1%);"), "");
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn locate_then_extract() {
    let css = ".dark {\n  --muted: hsl(217.2 32.6% 17.5%);\n  --radius: 1rem;\n}";
    let block = locate_block(css, ".dark").unwrap();
    assert_eq!(
        extract_colors(block),
        "        muted: { h: 217.2, s: 32.6, l: 17.5 },"
    );
}

#[test]
fn nested_rule_tokens_are_included() {
    let css = ":root { --card: hsl(1 1% 1%); @supports (color: red) { --popover: hsl(2 2% 2%); } }";
    let block = locate_block(css, ":root").unwrap();
    let lines = extract_colors(block);
    assert_eq!(lines.lines().count(), 2);
    assert!(lines.contains("popover"));
}
