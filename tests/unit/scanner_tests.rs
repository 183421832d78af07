/*!
 * Unit tests for the zone scanner over realistic source files
 */

use srclate::scanner::{skeleton, DelimiterKind, Zone, ZoneScanner};

use crate::common;

fn reassemble(src: &str) -> String {
    ZoneScanner::new(src).map(|z| z.raw().to_string()).collect()
}

#[test]
fn test_scan_withSampleJavaSource_shouldReconstructExactly() {
    let src = common::sample_java_source();
    assert_eq!(reassemble(src), src);
}

#[test]
fn test_scan_withSampleJavaSource_shouldFindOnePayloadPerKind() {
    let src = common::sample_java_source();
    let kinds: Vec<DelimiterKind> = ZoneScanner::new(src)
        .filter_map(|z| match z {
            Zone::Translatable { kind, .. } => Some(kind),
            Zone::Opaque(_) => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            DelimiterKind::DocComment,
            DelimiterKind::LineComment,
            DelimiterKind::StringLiteral,
        ]
    );
}

#[test]
fn test_scan_withDenseJavaFile_shouldClassifyEveryZone() {
    let src = r#"import java.util.*;

/**
 * Форматирует сообщения.
 */
class Formatter {
    static final String TEMPLATE = "Найдено %d файлов"; // шаблон
    static final char TAB = '\t';

    String render(int n) {
        /* подстановка счётчика */
        return String.format(TEMPLATE, n);
    }
}
"#;
    assert_eq!(reassemble(src), src);

    let payloads: Vec<&str> = ZoneScanner::new(src)
        .filter_map(|z| match z {
            Zone::Translatable { payload, .. } => Some(payload),
            Zone::Opaque(_) => None,
        })
        .collect();
    assert_eq!(
        payloads,
        vec![
            "\n * Форматирует сообщения.\n ",
            "Найдено %d файлов",
            " шаблон",
            " подстановка счётчика ",
        ]
    );
}

#[test]
fn test_scan_withCharLiteralsBetweenStrings_shouldKeepThemOpaque() {
    let src = "a(\"до\"); char c = '\"'; b(\"после\");";
    let payloads: Vec<&str> = ZoneScanner::new(src)
        .filter_map(|z| match z {
            Zone::Translatable { payload, .. } => Some(payload),
            Zone::Opaque(_) => None,
        })
        .collect();
    assert_eq!(payloads, vec!["до", "после"]);
}

#[test]
fn test_skeleton_withTranslatedCounterpart_shouldMatchSource() {
    // Structure equality is what the QA pass relies on
    assert_eq!(
        skeleton(common::sample_java_source()),
        skeleton(common::sample_java_translated())
    );
}

#[test]
fn test_skeleton_withDroppedLiteral_shouldDiffer() {
    let src = "a(\"один\"); b(\"два\");";
    let broken = "a(\"один\"); b();";
    assert_ne!(skeleton(src), skeleton(broken));
}
