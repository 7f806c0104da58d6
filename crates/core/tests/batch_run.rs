use guidemix_core::batch::{BatchRunner, DocumentOutcome};
use guidemix_core::site::{SitePage, SiteWalker};
use guidemix_core::variants::{Locale, VariantKey};
use guidemix_core::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const GUIDE_EN: &str = include_str!("fixtures/guide_en.html");
const GUIDE_KO: &str = include_str!("fixtures/guide_ko.html");

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Five Korean pages, one English companion, one page without a full guide.
fn create_site() -> TempDir {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    for name in ["a", "b", "c", "d", "e"] {
        write_file(&root.join(format!("tools/dev/{name}.html")), GUIDE_KO);
    }
    write_file(&root.join("tools/life/broken.html"), &GUIDE_KO.replace(">활용 사례<", ">사례<"));
    write_file(&root.join("tools/dev/index.html"), GUIDE_KO);
    write_file(&root.join("en/tools/dev/b.html"), GUIDE_EN);
    tmp
}

fn walk(root: &Path) -> Vec<SitePage> {
    SiteWalker::new(root, vec![PathBuf::from("tools/dev"), PathBuf::from("tools/life")])
        .unwrap()
        .with_companion(&root.join("en"))
        .walk()
        .unwrap()
}

fn runner() -> BatchRunner {
    BatchRunner::new(
        Engine::with_defaults().unwrap(),
        Locale::builtin("ko").unwrap(),
        Some(Locale::builtin("en").unwrap()),
    )
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn assigns_variants_by_sorted_position() {
    let site = create_site();
    let report = runner().run(&walk(site.path()));

    let assigned: Vec<_> =
        report.pages.iter().map(|p| (p.relative_path.as_str(), p.variant)).collect();
    assert_eq!(
        assigned,
        vec![
            ("tools/dev/a.html", VariantKey::A),
            ("tools/dev/b.html", VariantKey::B),
            ("tools/dev/c.html", VariantKey::C),
            ("tools/dev/d.html", VariantKey::D),
            ("tools/dev/e.html", VariantKey::A),
            ("tools/life/broken.html", VariantKey::B),
        ]
    );
    assert_eq!(report.stats.per_variant[&VariantKey::A], 2);
    assert_eq!(report.stats.per_variant[&VariantKey::B], 2);
}

#[test]
fn execute_writes_changed_documents_only() {
    let site = create_site();
    let root = site.path();
    let report = runner().run(&walk(root));

    let stats = &report.stats;
    assert_eq!(stats.pages, 6);
    assert_eq!(stats.documents, 7);
    assert_eq!(stats.transformed, 4);
    assert_eq!(stats.unchanged, 2);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.written, 4);

    assert_eq!(read(root, "tools/dev/a.html"), GUIDE_KO);
    assert_eq!(read(root, "tools/dev/e.html"), GUIDE_KO);
    assert!(read(root, "tools/dev/b.html").contains(">이용 가이드</h3>"));
    assert!(read(root, "tools/dev/c.html").contains(">Q&A</h3>"));
    assert!(read(root, "tools/dev/d.html").contains(">시작하기</h3>"));
    assert!(read(root, "en/tools/dev/b.html").contains(">User Guide</h3>"));
    assert_eq!(read(root, "tools/dev/index.html"), GUIDE_KO);

    let broken = &report.pages[5];
    assert!(!broken.is_clean());
    assert!(matches!(broken.primary.outcome, DocumentOutcome::Unresolved(_)));
    assert!(read(root, "tools/life/broken.html").contains(">사례<"));
}

#[test]
fn dry_run_writes_nothing() {
    let site = create_site();
    let root = site.path();
    let report = runner().dry_run(true).run(&walk(root));

    assert!(report.dry_run);
    assert_eq!(report.stats.transformed, 4);
    assert_eq!(report.stats.written, 0);
    for name in ["a", "b", "c", "d", "e"] {
        assert_eq!(read(root, &format!("tools/dev/{name}.html")), GUIDE_KO);
    }
    assert_eq!(read(root, "en/tools/dev/b.html"), GUIDE_EN);
}

#[test]
fn second_run_reports_already_applied() {
    let site = create_site();
    let root = site.path();
    runner().run(&walk(root));
    let snapshot = read(root, "tools/dev/c.html");

    let report = runner().run(&walk(root));
    assert_eq!(report.stats.transformed, 0);
    assert_eq!(report.stats.already_applied, 4);
    assert_eq!(report.stats.written, 0);
    assert_eq!(read(root, "tools/dev/c.html"), snapshot);
}

#[test]
fn unreadable_page_is_counted_and_skipped() {
    let site = create_site();
    let mut pages = walk(site.path());
    pages.insert(
        0,
        SitePage {
            relative_path: "tools/dev/0-missing.html".to_string(),
            primary_path: site.path().join("tools/dev/0-missing.html"),
            companion_path: None,
            size: 0,
        },
    );

    let report = runner().run(&pages);
    assert_eq!(report.stats.failed, 1);
    assert!(matches!(report.pages[0].primary.outcome, DocumentOutcome::Failed(_)));
    assert_eq!(report.stats.pages, 7);
}
