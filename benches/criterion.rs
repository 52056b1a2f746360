use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};

use delve_loca::{Catalog, FmtArg, Lang, MsgContext, Reports, Session};

static RU_PO: &str = include_str!("../tests/files/lang/ru.po");

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_ru_catalog", |b| {
        b.iter(|| {
            let mut reports = Reports::new();
            Catalog::parse(Path::new("ru.po"), RU_PO, &mut reports)
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut reports = Reports::new();
    let session =
        Session::load(Path::new("tests/files/lang"), Lang::new("ru").unwrap(), &mut reports)
            .unwrap();
    c.bench_function("render_melee_message", |b| {
        b.iter(|| {
            session
                .render(MsgContext::MonsterMeleeAttacker, &[FmtArg::Str("Шакал")])
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
