use std::{
    collections::HashSet,
    sync::LazyLock,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixRole {
    Prefix,
    Suffix,
    Ending,
}

const PREFIX_LIST: &[&str] = &[
    "анти", "архи", "би", "вице", "гипер", "де", "дез", "дис", "им", "интер", "ир", "квази",
    "контр", "макро", "микро", "обер", "пост", "пре", "прото", "псевдо", "ре", "суб", "супер",
    "транс", "ультра", "экзо", "экс", "экстра", "без", "бес", "в", "во", "вз", "взо", "вс",
    "вне", "внутри", "воз", "возо", "вос", "все", "вы", "до", "за", "из", "изо", "ис", "испод",
    "кое", "кой", "меж", "междо", "между", "на", "над", "надо", "наи", "не", "небез", "небес",
    "недо", "ни", "низ", "низо", "нис", "о", "об", "обо", "обез", "обес", "около", "от", "ото",
    "па", "пере", "по", "под", "подо", "поза", "после", "пра", "пред", "предо", "преди", "при",
    "про", "противо", "раз", "разо", "рас", "роз", "рос", "с", "со", "сверх", "среди", "су",
    "сыз", "тре", "у", "чрез", "через", "черес",
];

const ENDING_LIST: &[&str] = &[
    "а", "я", "о", "е", "ь", "и", "ы", "ая", "яя", "ое", "ее", "ый", "ать", "ять", "еть", "уть",
    "у", "ю", "ем", "ешь", "ете", "ет", "ут", "ют", "ал", "ял", "ала", "яла", "али", "яли", "ул",
    "ула", "ули", "ся", "сь",
];

// Word-forming suffixes proper.
const SUFFIX_LIST: &[&str] = &[
    "к", "л", "н", "в", "а", "е", "и", "я", "жды", "либо", "нибудь", "то", "учи", "ючи", "вши",
    "вш", "изм", "ист", "алей", "ан", "ин", "ян", "ар", "ст", "ель", "лк", "ль", "ик", "иц",
    "адь", "ак", "ач", "ени", "от", "ет", "есть", "ость", "ец", "изн", "их", "ни", "ун", "ыш",
];

// Verbal and participle suffixes.
const VERBAL_SUFFIX_LIST: &[&str] = &["ев", "ов", "нич", "ну", "ть", "ств", "ся"];

// Diminutive and augmentative markers.
const EVALUATIVE_SUFFIX_LIST: &[&str] = &[
    "ец", "ани", "енько", "онько", "енеч", "онеч", "ин", "ищ", "ик", "ок", "чик", "иц", "инк",
    "оч", "очк", "ушк", "уш", "юшк", "ышк", "ишк", "ушек", "ышек", "ень", "оньк", "ех",
    "ехонь", "ехоньк", "оханьк", "ешень", "ешеньк", "ошеньк", "ошень", "ош", "онь", "ашк",
    "аш", "ц", "ен", "енк", "онк", "еньк",
];

/// Immutable set of affixes sharing one role. Entries keep their first-listed
/// order so that iteration is deterministic.
#[derive(Debug, Clone)]
pub struct AffixTable {
    role: AffixRole,
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl AffixTable {
    pub fn new<'a>(role: AffixRole, lists: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries = Vec::new();
        let mut lookup = HashSet::new();
        for affix in lists.into_iter().map(str::trim).filter(|affix| !affix.is_empty()) {
            if lookup.insert(affix.to_string()) {
                entries.push(affix.to_string());
            }
        }
        AffixTable { role, entries, lookup }
    }

    pub fn role(&self) -> AffixRole {
        self.role
    }

    pub fn contains(&self, affix: &str) -> bool {
        self.lookup.contains(affix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static PREFIXES: LazyLock<AffixTable> =
    LazyLock::new(|| AffixTable::new(AffixRole::Prefix, PREFIX_LIST.iter().copied()));

static SUFFIXES: LazyLock<AffixTable> = LazyLock::new(|| {
    AffixTable::new(
        AffixRole::Suffix,
        SUFFIX_LIST
            .iter()
            .chain(VERBAL_SUFFIX_LIST)
            .chain(EVALUATIVE_SUFFIX_LIST)
            .copied(),
    )
});

static ENDINGS: LazyLock<AffixTable> =
    LazyLock::new(|| AffixTable::new(AffixRole::Ending, ENDING_LIST.iter().copied()));

pub fn prefixes() -> &'static AffixTable {
    &PREFIXES
}

pub fn suffixes() -> &'static AffixTable {
    &SUFFIXES
}

pub fn endings() -> &'static AffixTable {
    &ENDINGS
}

/// The three tables the rule-based segmenter cuts with.
#[derive(Debug, Clone, Copy)]
pub struct AffixTables<'a> {
    pub prefixes: &'a AffixTable,
    pub suffixes: &'a AffixTable,
    pub endings: &'a AffixTable,
}

impl AffixTables<'static> {
    pub fn builtin() -> Self {
        AffixTables { prefixes: prefixes(), suffixes: suffixes(), endings: endings() }
    }
}
