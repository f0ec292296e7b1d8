use std::{
    collections::HashSet,
    fs::File,
    io::{
        stdout,
        BufReader,
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::Context;
use clap::{
    Args,
    Parser,
    Subcommand,
};
use morphseg::{
    core::{
        pipeline::{
            run_synonyms,
            write_outputs,
        },
        StopwordFilter,
    },
    dictionary::{
        load_vocabulary,
        synonyms::shorten_synonyms,
        GuardedParadigms,
        IdentityParadigms,
        ParadigmDictionary,
        ParadigmProvider,
    },
    tools::Lemmatizer,
    SegmentationPipeline,
    SegmenterKind,
    Settings,
};
use tracing_subscriber::{
    fmt,
    EnvFilter,
};

#[derive(Parser)]
#[command(version, about = "Morpheme statistics for inflected vocabularies")]
struct Cli {
    /// Settings file (defaults to the app data dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads, 0 for one per core
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args)]
struct Lexicon {
    /// Vocabulary with `<frequency> <word>` records
    #[arg(long)]
    vocab: PathBuf,

    /// Paradigm dictionary with `lemma<TAB>forms` records
    #[arg(long)]
    paradigms: Option<PathBuf>,

    /// Abort on the first malformed vocabulary record
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Statistical morphs mined from each paradigm
    Morphs {
        #[command(flatten)]
        lexicon: Lexicon,
        #[arg(long)]
        word_morphems: PathBuf,
        #[arg(long)]
        morphem_info: PathBuf,
    },
    /// The substring shared by every form of each word
    Roots {
        #[command(flatten)]
        lexicon: Lexicon,
        #[arg(long)]
        word_roots: PathBuf,
        #[arg(long)]
        root_info: PathBuf,
    },
    /// Prefix, stem, suffix and ending cut with the affix tables
    SmartMorphs {
        #[command(flatten)]
        lexicon: Lexicon,
        #[arg(long)]
        word_smart_morphems: PathBuf,
        #[arg(long)]
        smart_morphem_info: PathBuf,
    },
    /// Top synonyms per vocabulary word
    Synonyms {
        #[command(flatten)]
        lexicon: Lexicon,
        #[arg(long)]
        syns: PathBuf,
        #[arg(long)]
        word_synonyms: PathBuf,
        #[arg(long)]
        synonym_info: PathBuf,
    },
    /// Keep only synonym records whose head is in the vocabulary
    ShortSyns {
        #[command(flatten)]
        lexicon: Lexicon,
        #[arg(long)]
        syns: PathBuf,
        /// Defaults to `<syns>_short`
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Lemmatize a text file line by line, dropping stopwords
    Lemmatize {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        paradigms: Option<PathBuf>,
        /// Extra stopwords, one per line
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref());
    if let Some(threads) = cli.threads {
        settings.threads = threads;
    }

    if let Err(e) = run(cli.cmd, &mut settings) {
        tracing::error!(error = %format!("{e:#}"), "run failed");
        return Err(e);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).try_init();
}

fn run(cmd: Cmd, settings: &mut Settings) -> anyhow::Result<()> {
    match cmd {
        Cmd::Morphs { lexicon, word_morphems, morphem_info } => run_segmentation(
            SegmenterKind::Statistical,
            &lexicon,
            settings,
            &word_morphems,
            &morphem_info,
        ),
        Cmd::Roots { lexicon, word_roots, root_info } => {
            run_segmentation(SegmenterKind::Root, &lexicon, settings, &word_roots, &root_info)
        }
        Cmd::SmartMorphs { lexicon, word_smart_morphems, smart_morphem_info } => run_segmentation(
            SegmenterKind::RuleBased,
            &lexicon,
            settings,
            &word_smart_morphems,
            &smart_morphem_info,
        ),
        Cmd::Synonyms { lexicon, syns, word_synonyms, synonym_info } => {
            settings.strict_vocabulary |= lexicon.strict;
            let vocabulary = load_vocabulary(&lexicon.vocab, settings.strict_vocabulary)?;
            let provider = open_provider(lexicon.paradigms.as_deref(), settings)?;
            let aggregator = run_synonyms(&vocabulary, &syns, provider.as_ref(), settings)?;
            write_outputs(&aggregator, &word_synonyms, &synonym_info)?;
            Ok(())
        }
        Cmd::ShortSyns { lexicon, syns, output } => {
            settings.strict_vocabulary |= lexicon.strict;
            let vocabulary = load_vocabulary(&lexicon.vocab, settings.strict_vocabulary)?;
            let known: HashSet<String> = vocabulary.into_iter().map(|entry| entry.word).collect();
            let provider = open_provider(lexicon.paradigms.as_deref(), settings)?;

            let output = output.unwrap_or_else(|| {
                let mut name = syns.clone().into_os_string();
                name.push("_short");
                PathBuf::from(name)
            });
            let reader = BufReader::new(
                File::open(&syns).with_context(|| format!("opening {}", syns.display()))?,
            );
            let mut writer = BufWriter::new(File::create(&output)?);
            let kept = shorten_synonyms(reader, &mut writer, provider.as_ref(), &known)?;
            writer.flush()?;
            tracing::info!(kept, output = %output.display(), "synonyms shortened");
            Ok(())
        }
        Cmd::Lemmatize { file, paradigms, stopwords } => {
            let provider = open_provider(paradigms.as_deref(), settings)?;
            let mut filter = StopwordFilter::russian();
            if let Some(path) = stopwords {
                filter.extend_from_file(&path)?;
            }

            let lemmatizer = Lemmatizer::new(provider.as_ref(), filter)?;
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("opening {}", file.display()))?,
            );
            let mut out = BufWriter::new(stdout().lock());
            let lines = lemmatizer.lemmatize(reader, &mut out)?;
            out.flush()?;
            tracing::info!(lines, "lemmatization finished");
            Ok(())
        }
    }
}

fn run_segmentation(
    kind: SegmenterKind,
    lexicon: &Lexicon,
    settings: &mut Settings,
    word_output: &Path,
    info_output: &Path,
) -> anyhow::Result<()> {
    settings.strict_vocabulary |= lexicon.strict;
    let vocabulary = load_vocabulary(&lexicon.vocab, settings.strict_vocabulary)?;
    let provider = open_provider(lexicon.paradigms.as_deref(), settings)?;

    let pipeline = SegmentationPipeline::new(provider.as_ref(), settings);
    let aggregator = pipeline.run(kind, &vocabulary)?;
    write_outputs(&aggregator, word_output, info_output)?;
    Ok(())
}

fn open_provider(
    paradigms: Option<&Path>,
    settings: &Settings,
) -> anyhow::Result<Box<dyn ParadigmProvider>> {
    let Some(path) = paradigms else {
        tracing::info!("no paradigm dictionary given, every word is its own paradigm");
        return Ok(Box::new(IdentityParadigms));
    };

    let dictionary = ParadigmDictionary::load(path)
        .with_context(|| format!("loading paradigms from {}", path.display()))?;
    if settings.lookup_timeout_ms == 0 {
        return Ok(Box::new(dictionary));
    }
    Ok(Box::new(GuardedParadigms::new(dictionary, settings.lookup_timeout())?))
}
