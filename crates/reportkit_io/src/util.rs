//! Stateless helpers shared by the export kernels.

/// Characters that cannot appear in an output file stem.
const TUP_FILE_NAME_ILLEGAL: [char; 2] = ['/', '\\'];

/// Build `${title}.${ext}`, replacing path separators in the stem.
pub fn derive_output_file_name(title: &str, ext: &str) -> String {
    let c_stem: String = title
        .chars()
        .map(|chr| {
            if TUP_FILE_NAME_ILLEGAL.contains(&chr) || chr.is_control() {
                '_'
            } else {
                chr
            }
        })
        .collect();
    let c_stem = if c_stem.trim().is_empty() {
        "report".to_string()
    } else {
        c_stem
    };
    format!("{c_stem}.{}", ext.trim_start_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_keeps_title_verbatim() {
        assert_eq!(
            derive_output_file_name("Plan semana 12", "xlsx"),
            "Plan semana 12.xlsx"
        );
        assert_eq!(derive_output_file_name("Catalogo", ".pdf"), "Catalogo.pdf");
    }

    #[test]
    fn test_output_file_name_replaces_separators() {
        assert_eq!(derive_output_file_name("A/B\\C", "pdf"), "A_B_C.pdf");
        assert_eq!(derive_output_file_name("  ", "pdf"), "report.pdf");
    }
}
