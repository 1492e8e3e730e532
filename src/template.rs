//! Key-value substitution into the prompt configuration template.
//!
//! The template is plain text with at most one color section, headed by
//! `[palette.colors]` or `[palettes.colors]`. Substitution rewrites or
//! appends `role = '<color>'` assignments inside that section and leaves
//! every other byte of the template untouched.

use crate::palette::Palette;

/// Apply the palette to the template's color section.
///
/// Locates the color section, then for each role with a defined color
/// either rewrites the existing assignment line or appends a new one at
/// the end of the section. Roles without a color are skipped entirely.
/// A template without a color section is returned unchanged. Running the
/// substitution twice with the same palette yields the same text.
///
/// # Arguments
///
/// * `template` - Full template text
/// * `palette` - Colors to substitute
///
/// # Returns
///
/// The template with the color section rewritten
#[must_use]
pub fn substitute(template: &str, palette: &Palette) -> String {
    let Some((start, end)) = find_color_section(template) else {
        return template.to_string();
    };

    let mut section = template[start..end].to_string();
    for (role, color) in palette.roles() {
        if let Some(color) = color {
            apply_role(&mut section, role, color);
        }
    }

    let mut out = String::with_capacity(template.len() + section.len());
    out.push_str(&template[..start]);
    out.push_str(&section);
    out.push_str(&template[end..]);
    out
}

/// Find the byte range of the color section, header line included.
///
/// The header is a whole line equal to `[palette.colors]` or
/// `[palettes.colors]` once surrounding whitespace is stripped. The
/// section runs to the next line whose first character is `[`, or to the
/// end of the text.
fn find_color_section(template: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    let mut start = None;

    for line in template.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match start {
            None => {
                if matches!(line.trim(), "[palette.colors]" | "[palettes.colors]") {
                    start = Some(line_start);
                }
            }
            Some(section_start) => {
                if line.starts_with('[') {
                    return Some((section_start, line_start));
                }
            }
        }
    }

    start.map(|section_start| (section_start, template.len()))
}

/// Rewrite or append one role assignment within the section text.
///
/// Every line assigning the role is replaced whole by `role = '<color>'`;
/// when no line assigns it, the assignment is appended after making sure
/// the section ends with a newline.
fn apply_role(section: &mut String, role: &str, color: &str) {
    let assignment = format!("{role} = '{color}'");
    let mut out = String::with_capacity(section.len() + assignment.len());
    let mut replaced = false;

    for line in section.split_inclusive('\n') {
        if assigns_role(line, role) {
            out.push_str(&assignment);
            if line.ends_with('\n') {
                out.push('\n');
            }
            replaced = true;
        } else {
            out.push_str(line);
        }
    }

    if !replaced {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&assignment);
        out.push('\n');
    }

    *section = out;
}

/// Whether a line is an assignment to the given role.
///
/// Matches optional leading whitespace, the exact role name, optional
/// whitespace, then `=`. A longer key sharing the role as a prefix
/// (`text` vs `text2`) does not match.
fn assigns_role(line: &str, role: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix(role) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_with_accent(accent: &str) -> Palette {
        Palette {
            accent: Some(accent.to_string()),
            ..Palette::default()
        }
    }

    #[test]
    fn test_replace_existing_assignment() {
        let template = "[palette.colors]\naccent = '#000000'\n[other]\nstyle = \"bold\"\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(
            result,
            "[palette.colors]\naccent = '#123456'\n[other]\nstyle = \"bold\"\n"
        );
    }

    #[test]
    fn test_append_missing_assignment() {
        let template = "[palette.colors]\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'\n");

        // Re-running with the same palette changes nothing
        assert_eq!(substitute(&result, &palette_with_accent("#123456")), result);
    }

    #[test]
    fn test_missing_section_returns_template_unchanged() {
        let template = "[character]\nsuccess_symbol = '>'\n";
        assert_eq!(substitute(template, &palette_with_accent("#123456")), template);

        assert_eq!(substitute("", &palette_with_accent("#123456")), "");
    }

    #[test]
    fn test_plural_section_header() {
        let template = "[palettes.colors]\naccent = '#000000'\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palettes.colors]\naccent = '#123456'\n");
    }

    #[test]
    fn test_header_whitespace_is_ignored() {
        let template = "  [palette.colors]  \naccent = '#000000'\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "  [palette.colors]  \naccent = '#123456'\n");
    }

    #[test]
    fn test_substitution_stays_inside_section() {
        let template = "\
[palette.colors]
accent = '#000000'
[decoration]
accent = 'leave me alone'
";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(
            result,
            "\
[palette.colors]
accent = '#123456'
[decoration]
accent = 'leave me alone'
"
        );
    }

    #[test]
    fn test_text_before_section_is_preserved() {
        let template = "format = \"$directory$git_branch\"\n\n[palette.colors]\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(
            result,
            "format = \"$directory$git_branch\"\n\n[palette.colors]\naccent = '#123456'\n"
        );
    }

    #[test]
    fn test_absent_roles_are_never_written() {
        let palette = Palette {
            accent: Some("#123456".to_string()),
            git_bg: None,
            ..Palette::default()
        };
        let result = substitute("[palette.colors]\n", &palette);
        assert!(!result.contains("git_bg"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'\n");
    }

    #[test]
    fn test_multiple_roles_replace_and_append() {
        let palette = Palette {
            accent: Some("#111111".to_string()),
            dir_bg: Some("#222222".to_string()),
            text: Some("#333333".to_string()),
            ..Palette::default()
        };
        let template = "[palette.colors]\ndir_bg = '#000000'\n[character]\n";
        let result = substitute(template, &palette);
        assert_eq!(
            result,
            "[palette.colors]\ndir_bg = '#222222'\naccent = '#111111'\ntext = '#333333'\n[character]\n"
        );
    }

    #[test]
    fn test_role_names_do_not_clobber_longer_keys() {
        let palette = Palette {
            text: Some("#111111".to_string()),
            ..Palette::default()
        };
        let template = "[palette.colors]\ntext2 = '#000000'\ntext = '#000000'\n";
        let result = substitute(template, &palette);
        assert_eq!(result, "[palette.colors]\ntext2 = '#000000'\ntext = '#111111'\n");
    }

    #[test]
    fn test_indented_assignments_are_rewritten_whole() {
        let template = "[palette.colors]\n  accent   = '#000000'  # note\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'\n");
    }

    #[test]
    fn test_duplicate_assignments_all_rewritten() {
        let template = "[palette.colors]\naccent = '#000000'\naccent = '#ffffff'\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'\naccent = '#123456'\n");
    }

    #[test]
    fn test_section_at_end_of_file_without_newline() {
        let template = "[palette.colors]\naccent = '#000000'";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'");

        let template = "[palette.colors]";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\naccent = '#123456'\n");
    }

    #[test]
    fn test_indented_bracket_line_does_not_end_section() {
        // Only a line starting with '[' in column one closes the section
        let template = "[palette.colors]\n  [not.a.header]\naccent = '#000000'\n";
        let result = substitute(template, &palette_with_accent("#123456"));
        assert_eq!(result, "[palette.colors]\n  [not.a.header]\naccent = '#123456'\n");
    }
}
