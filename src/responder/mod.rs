//! Rule-based fallback chatbot.
//!
//! Two reply strategies live here side by side:
//!
//! * [`Mode::Structured`]: an ordered table of [`Rule`]s, first match
//!   wins, each producing a deterministic markdown answer.
//! * [`Mode::Canned`]: the earlier behaviour, a random pick among a few
//!   fixed replies per keyword.

use rand::Rng;

pub mod canned;
pub mod structured;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Structured,
    Canned,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "structured" => Some(Mode::Structured),
            "canned"     => Some(Mode::Canned),
            _            => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    /// Only `ru` is Russian; every other tag gets English.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "ru" { Lang::Ru } else { Lang::En }
    }
}

/// A message ready for classification.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    /// Lower-cased message text.
    pub text: &'a str,
    pub lang: Lang,
}

impl<'a> Query<'a> {
    pub fn has_any(&self, needles: &[&str]) -> bool {
        contains_any(self.text, needles)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Sport,
    Math,
    Physics,
    Chemistry,
    Programming,
    Essay,
    Translation,
    Table,
    Explain,
    Fallback,
}

pub struct Rule {
    pub category: Category,
    pub matches: fn(&str) -> bool,
    pub generate: fn(&Query) -> String,
}

/// Priority order. The fallback is not in the table; it answers when no
/// rule matches.
pub static RULES: &[Rule] = &[
    Rule { category: Category::Greeting,    matches: is_greeting,    generate: structured::greeting },
    Rule { category: Category::Sport,       matches: is_sport,       generate: structured::sport },
    Rule { category: Category::Math,        matches: is_math,        generate: structured::math },
    Rule { category: Category::Physics,     matches: is_physics,     generate: structured::physics },
    Rule { category: Category::Chemistry,   matches: is_chemistry,   generate: structured::chemistry },
    Rule { category: Category::Programming, matches: is_programming, generate: structured::programming },
    Rule { category: Category::Essay,       matches: is_essay,       generate: structured::essay },
    Rule { category: Category::Translation, matches: is_translation, generate: structured::translation },
    Rule { category: Category::Table,       matches: is_table,       generate: structured::table },
    Rule { category: Category::Explain,     matches: is_explain,     generate: structured::explain },
];

pub fn classify(text: &str) -> Category {
    RULES
        .iter()
        .find(|r| (r.matches)(text))
        .map_or(Category::Fallback, |r| r.category)
}

/// Deterministic structured answer. `message` may be in any case.
pub fn respond_structured(message: &str, lang: Lang) -> String {
    let text = message.to_lowercase();
    let q = Query { text: &text, lang };
    match RULES.iter().find(|r| (r.matches)(&text)) {
        Some(rule) => (rule.generate)(&q),
        None       => structured::fallback(&q),
    }
}

/// Random canned answer drawn from `rng`.
pub fn respond_canned<R: Rng + ?Sized>(message: &str, lang: Lang, rng: &mut R) -> String {
    canned::reply(&message.to_lowercase(), lang, rng).to_string()
}

/* ----------------------------- triggers ----------------------------- */

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty())
}

/// Whole-word match; for short words that hide inside longer ones.
pub fn has_word(text: &str, words: &[&str]) -> bool {
    tokens(text).any(|tok| words.contains(&tok))
}

/// Some word starts with one of `stems` ("спорт" hits "спортом", not "транспорт").
pub fn has_stem(text: &str, stems: &[&str]) -> bool {
    tokens(text).any(|tok| stems.iter().any(|s| tok.starts_with(s)))
}

const GREETING: &[&str] = &[
    "привет", "здравствуй", "добрый день", "добрый вечер", "доброе утро",
    "что ты умеешь", "hello", "good morning", "good evening", "what can you do",
];
const GREETING_WORDS: &[&str] = &["hi", "hey", "хай", "салют"];

const SPORT: &[&str] = &[
    "спорт", "трениров", "футбол", "баскетбол", "волейбол", "фитнес", "пробежк",
    "бегать", "отжиман", "sport", "workout", "training", "football", "basketball",
    "fitness", "running",
];
const SPORT_PHRASES: &[&str] = &["push-up", "push up"];

const MATH: &[&str] = &[
    "математ", "уравнен", "алгебр", "геометр", "интеграл", "производн", "дроб",
    "процент", "корень", "квадратн", "math", "equation", "algebra", "geometry",
    "integral", "derivative", "fraction", "percent", "quadratic",
];

const PHYSICS: &[&str] = &[
    "физик", "скорост", "ускорен", "ньютон", "энерги", "закон ома", "давлени",
    "physics", "velocity", "speed", "acceleration", "newton", "energy", "ohm",
    "pressure",
];

const CHEMISTRY: &[&str] = &[
    "хими", "реакци", "молекул", "молярн", "валентн", "таблица менделеева",
    "chemistry", "chemical", "reaction", "molecule", "molar", "valence",
    "periodic table",
];
const CHEMISTRY_WORDS: &[&str] = &["атом", "атомы", "моль", "atom", "atoms", "mole"];

const PROGRAMMING: &[&str] = &[
    "программ", "python", "питон", "javascript", "алгоритм", "функци", "цикл",
    "programming", "algorithm", "function", "loop", "coding",
];
const PROGRAMMING_WORDS: &[&str] = &["код", "кода", "code", "js", "rust", "java", "c++"];

const ESSAY: &[&str] = &[
    "сочинен", "эссе", "реферат", "доклад", "essay", "composition", "report",
];

const TRANSLATION: &[&str] = &["перевед", "перевод", "переведи", "translat"];

const TABLE: &[&str] = &["таблиц", "сравн", "compar", "versus"];
const TABLE_WORDS: &[&str] = &["table", "tables", "vs"];

pub(crate) const EXPLAIN: &[&str] = &[
    "что такое", "что значит", "объясни", "расскажи про", "расскажи о", "кто такой",
    "what is", "what's", "what are", "explain", "tell me about", "who is",
];

fn is_greeting(t: &str) -> bool { contains_any(t, GREETING) || has_word(t, GREETING_WORDS) }
fn is_sport(t: &str) -> bool { has_stem(t, SPORT) || contains_any(t, SPORT_PHRASES) }
fn is_math(t: &str) -> bool { has_stem(t, MATH) }
fn is_physics(t: &str) -> bool { contains_any(t, PHYSICS) }
fn is_chemistry(t: &str) -> bool { contains_any(t, CHEMISTRY) || has_word(t, CHEMISTRY_WORDS) }
fn is_programming(t: &str) -> bool { has_stem(t, PROGRAMMING) || has_word(t, PROGRAMMING_WORDS) }
fn is_essay(t: &str) -> bool { contains_any(t, ESSAY) }
fn is_translation(t: &str) -> bool { contains_any(t, TRANSLATION) }
fn is_table(t: &str) -> bool { has_stem(t, TABLE) || has_word(t, TABLE_WORDS) }
fn is_explain(t: &str) -> bool { contains_any(t, EXPLAIN) }
