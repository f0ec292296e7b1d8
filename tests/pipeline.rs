use std::{
    fs,
    path::Path,
};

use morphseg::{
    core::pipeline::{
        run_synonyms,
        write_outputs,
    },
    dictionary::{
        load_vocabulary,
        GuardedParadigms,
        ParadigmDictionary,
    },
    MorphError,
    MorphInfo,
    SegmentationPipeline,
    SegmenterKind,
    Settings,
};

const PARADIGMS: &str = "читать\tчитаю читаешь читает\n\
                         подоконник\tподоконник подоконника подоконнику\n\
                         дом\tдом дома дому\n\
                         здание\tздание здания зданию\n";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn roots_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = write(dir.path(), "vocab", "100 читаю\n");
    let paradigms = write(dir.path(), "paradigms", PARADIGMS);

    let vocabulary = load_vocabulary(&vocab, true).unwrap();
    let dictionary = ParadigmDictionary::load(&paradigms).unwrap();
    let settings = Settings::default();
    let provider = GuardedParadigms::new(dictionary, settings.lookup_timeout()).unwrap();

    let pipeline = SegmentationPipeline::new(&provider, &settings);
    let aggregator = pipeline.run(SegmenterKind::Root, &vocabulary).unwrap();
    assert_eq!(aggregator.get("чита"), Some(MorphInfo { document_count: 1, weighted_sum: 100 }));

    let words = dir.path().join("word_roots");
    let info = dir.path().join("root_info");
    write_outputs(&aggregator, &words, &info).unwrap();
    assert_eq!(fs::read_to_string(&words).unwrap(), "читаю\tчита\n");
    assert_eq!(fs::read_to_string(&info).unwrap(), "чита\t1\t100\n");
}

#[test]
fn smart_morphs_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = write(dir.path(), "vocab", "6 подоконнику\n4 дома\nплохая строка\n");
    let paradigms = write(dir.path(), "paradigms", PARADIGMS);

    let settings = Settings::default();
    assert!(matches!(
        load_vocabulary(&vocab, true),
        Err(MorphError::MalformedVocabulary { line: 3, .. })
    ));
    let vocabulary = load_vocabulary(&vocab, false).unwrap();
    assert_eq!(vocabulary.len(), 2);

    let dictionary = ParadigmDictionary::load(&paradigms).unwrap();
    let pipeline = SegmentationPipeline::new(&dictionary, &settings);
    let aggregator = pipeline.run(SegmenterKind::RuleBased, &vocabulary).unwrap();

    // "дом" has a single part and is dropped.
    assert_eq!(aggregator.word_count(), 1);
    let record = &aggregator.records()[0];
    assert_eq!(record.word, "подоконнику");
    assert_eq!(record.morphs.concat(), "подоконник");
}

#[test]
fn synonyms_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = write(dir.path(), "vocab", "7 дом\n3 здание\n");
    let paradigms = write(dir.path(), "paradigms", PARADIGMS);
    let syns = write(
        dir.path(),
        "syns",
        "дома\tздания:0.8, изба:0.9\nдом\tздание:0.4\nздание\tдом:0.5\n",
    );

    let vocabulary = load_vocabulary(&vocab, true).unwrap();
    let dictionary = ParadigmDictionary::load(&paradigms).unwrap();
    let aggregator = run_synonyms(&vocabulary, &syns, &dictionary, &Settings::default()).unwrap();

    let records: Vec<(&str, Vec<String>)> =
        aggregator.records().iter().map(|r| (r.word.as_str(), r.morphs.clone())).collect();
    assert_eq!(
        records,
        vec![("дом", vec!["здание".to_string()]), ("здание", vec!["дом".to_string()])]
    );
    assert_eq!(aggregator.get("здание"), Some(MorphInfo { document_count: 1, weighted_sum: 7 }));
    assert_eq!(aggregator.get("дом"), Some(MorphInfo { document_count: 1, weighted_sum: 3 }));
}
