use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use delve_loca::{
    langs_in_dir, placeholders, validate_dir, FmtArg, Lang, LogReport, MsgContext, Reports,
    Session, Severity,
};

const LANG_DIR: &str = "tests/files/lang";
const BAD_DIR: &str = "tests/files/badlang";

fn load_ru() -> Session {
    let mut reports = Reports::new();
    let session = Session::load(Path::new(LANG_DIR), Lang::new("ru").unwrap(), &mut reports)
        .expect("ru catalogs should load");
    assert!(reports.is_empty(), "unexpected reports: {:?}", reports.take());
    session
}

fn take_report(vec: &mut Vec<LogReport>, pathname: &str, msg: &str) -> Option<LogReport> {
    for (i, report) in vec.iter().enumerate() {
        if report.msg == msg && report.pointers[0].loc.pathname() == PathBuf::from(pathname) {
            let result = (*report).clone();
            vec.remove(i);
            return Some(result);
        }
    }
    None
}

fn take_report_contains(
    vec: &mut Vec<LogReport>,
    pathname: &str,
    msg_contains: &str,
) -> Option<LogReport> {
    for (i, report) in vec.iter().enumerate() {
        if report.msg.contains(msg_contains)
            && report.pointers[0].loc.pathname() == PathBuf::from(pathname)
        {
            let result = (*report).clone();
            vec.remove(i);
            return Some(result);
        }
    }
    None
}

#[test]
fn context_canonicals_are_unique_and_well_formed() {
    let mut seen = std::collections::BTreeSet::new();
    for ctx in MsgContext::iter() {
        let canonical = ctx.canonical();
        assert!(seen.insert(canonical), "duplicate canonical for {ctx}");
        if ctx != MsgContext::Empty {
            assert!(!canonical.is_empty());
            assert!(!placeholders(canonical).unwrap().is_empty());
        }
    }
}

#[test]
fn default_locale_renders_the_canonical_text() {
    let session = Session::new();
    let result = session
        .render(MsgContext::MonsterMeleeAttacker, &[FmtArg::Str("the jackal")])
        .unwrap();
    assert_eq!(result, "the jackal bites you for 10 damage with +3 dagger!!!");
}

#[test]
fn every_context_renders_nonempty_in_every_locale() {
    let mut sessions = vec![Session::new()];
    for lang in langs_in_dir(Path::new(LANG_DIR)) {
        let mut reports = Reports::new();
        sessions.push(Session::load(Path::new(LANG_DIR), lang, &mut reports).unwrap());
    }
    for session in &sessions {
        for ctx in MsgContext::iter() {
            if ctx == MsgContext::Empty {
                continue;
            }
            let holes = placeholders(ctx.canonical()).unwrap();
            let args: Vec<FmtArg> = holes.iter().map(|_| FmtArg::Str("x")).collect();
            let result = session.render(ctx, &args).unwrap();
            assert!(!result.is_empty(), "empty render for {ctx}");
            assert!(!result.contains('%'), "placeholder left in `{result}`");
        }
    }
}

#[test]
fn switching_locale_changes_output_and_reset_restores_it() {
    let mut session = load_ru();
    let result =
        session.render(MsgContext::MonsterMeleeAttacker, &[FmtArg::Str("Шакал")]).unwrap();
    assert_eq!(result, "Шакал кусает вас, нанося 10 урона кинжалом +3!!!");

    session.reset();
    let result =
        session.render(MsgContext::MonsterMeleeAttacker, &[FmtArg::Str("the jackal")]).unwrap();
    assert_eq!(result, "the jackal bites you for 10 damage with +3 dagger!!!");

    let mut reports = Reports::new();
    session.switch(Path::new(LANG_DIR), Lang::new("ru").unwrap(), &mut reports).unwrap();
    assert_eq!(session.gettext("jackal"), "шакал");
}

#[test]
fn context_disambiguates_the_same_surface_string() {
    let session = load_ru();
    // The actor name inflects under the attacker context.
    assert_eq!(session.translate(MsgContext::MonsterMeleeAttacker, "The jackal"), "Шакал");
    // The verb conjugates under the verb context.
    assert_eq!(session.translate(MsgContext::MonsterMeleeAttackVerb, "bites"), "кусает");
    // Without a context there is no entry, so the source text comes back.
    assert_eq!(session.gettext("The jackal"), "The jackal");
    // The Empty context falls through to the plain lookup.
    assert_eq!(session.translate(MsgContext::Empty, "jackal"), "шакал");
}

#[test]
fn missing_translations_fall_back() {
    let session = load_ru();
    assert_eq!(session.gettext("no such key"), "no such key");
    let result = session
        .render_msg(MsgContext::MonsterMeleeAttacker, "%s claws you!", &[FmtArg::Str("the bat")])
        .unwrap();
    assert_eq!(result, "the bat claws you!");
}

#[test]
fn article_helper_shrinks_in_russian() {
    let session = load_ru();
    let result = session
        .render_msg(MsgContext::Empty, "a %s", &[FmtArg::Str(session.gettext("jackal"))])
        .unwrap();
    assert_eq!(result, "шакал");
}

#[test]
fn named_domains_are_looked_up_separately() {
    let session = load_ru();
    assert_eq!(
        session.dgettext("descriptions", "stone staircase leading down"),
        "каменная лестница, ведущая вниз"
    );
    // The default domain has no such entry.
    assert_eq!(session.gettext("stone staircase leading down"), "stone staircase leading down");
}

#[test]
fn clean_catalogs_validate_without_reports() {
    let mut reports = Reports::new();
    validate_dir(Path::new(LANG_DIR), &[Lang::new("ru").unwrap()], &mut reports).unwrap();
    assert!(reports.is_empty(), "unexpected reports: {:?}", reports.take());
}

#[test]
fn validator_catches_catalog_mistakes() {
    let mut reports = Reports::new();
    validate_dir(Path::new(BAD_DIR), &[Lang::new("ru").unwrap()], &mut reports).unwrap();
    let mut reports = reports.take();

    let badfile = "tests/files/badlang/flavour/ru.po";

    let report = take_report(
        &mut reports,
        "tests/files/badlang/Nope.po",
        "could not determine language from filename",
    );
    report.expect("language from filename test");

    let report = take_report(&mut reports, badfile, "string without ending quote");
    assert_eq!(report.expect("unterminated string test").severity, Severity::Error);

    let report = take_report(&mut reports, badfile, "plural entries are not supported");
    report.expect("plural entry test");

    let report = take_report_contains(&mut reports, badfile, "redefines an existing");
    let report = report.expect("duplicate key test");
    assert_eq!(report.pointers.len(), 2);

    let report = take_report(&mut reports, badfile, "entry has no translation");
    report.expect("empty msgstr test");

    let report = take_report(
        &mut reports,
        badfile,
        "translation does not use the same placeholders as the source text",
    );
    report.expect("placeholder parity test");

    let report =
        take_report(&mut reports, badfile, "msgctxt does not match any message context");
    report.expect("unknown context test");

    assert!(reports.is_empty(), "leftover reports: {reports:?}");
}

#[test]
fn duplicate_keys_last_one_wins() {
    let mut reports = Reports::new();
    let session =
        Session::load(Path::new(BAD_DIR), Lang::new("ru").unwrap(), &mut reports).unwrap();
    assert_eq!(session.dgettext("flavour", "dagger"), "нож");
}
