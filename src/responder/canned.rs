//! Random canned replies: the responder's earlier behaviour.
//!
//! The first keyword found in the message picks a set of three replies;
//! one is chosen uniformly. Without a match a default reply is chosen the
//! same way. Output is not reproducible unless the caller seeds `rng`.

use rand::{seq::SliceRandom, Rng};

use super::Lang;

type Table = &'static [(&'static str, [&'static str; 3])];

pub static REPLIES_RU: Table = &[
    ("привет", [
        "Привет! Чем могу помочь? 👋",
        "Здравствуйте! Я готов ответить на ваши вопросы! 😊",
        "Привет! Рад вас видеть! ✨",
    ]),
    ("как дела", [
        "Отлично! Готов помогать вам! 🚀",
        "Всё замечательно! Чем могу быть полезен? 😊",
        "Прекрасно! Задавайте вопросы! ⚡",
    ]),
    ("что ты умеешь", [
        "Я могу отвечать на вопросы, помогать с информацией и просто общаться! 🤖",
        "Я здесь, чтобы помогать вам находить ответы и решения! 💡",
        "Могу отвечать на вопросы, объяснять концепции и поддерживать беседу! 🎯",
    ]),
    ("спасибо", [
        "Пожалуйста! Рад помочь! 😊",
        "Всегда рад быть полезным! 🌟",
        "Обращайтесь ещё! 👍",
    ]),
    ("помощь", [
        "Конечно помогу! Задавайте ваш вопрос! 🤝",
        "Я здесь, чтобы помочь вам! Что вас интересует? 💪",
        "С радостью помогу! Расскажите, что нужно? 🎯",
    ]),
];

pub static REPLIES_EN: Table = &[
    ("hello", [
        "Hello! How can I help you? 👋",
        "Hi there! Ready to answer your questions! 😊",
        "Hello! Nice to see you! ✨",
    ]),
    ("how are you", [
        "Great! Ready to help you! 🚀",
        "Doing wonderful! How can I assist? 😊",
        "Excellent! Ask me anything! ⚡",
    ]),
    ("what can you do", [
        "I can answer questions, help with information, and chat! 🤖",
        "I'm here to help you find answers and solutions! 💡",
        "I can answer questions, explain concepts, and chat! 🎯",
    ]),
    ("thank you", [
        "You're welcome! Glad to help! 😊",
        "Always happy to help! 🌟",
        "Feel free to ask more! 👍",
    ]),
    ("help", [
        "Sure! What do you need help with? 🤝",
        "I'm here to help! What interests you? 💪",
        "Happy to help! Tell me what you need? 🎯",
    ]),
];

pub static DEFAULTS_RU: [&str; 5] = [
    "Интересный вопрос! Дайте подумать... 🤔",
    "Это очень познавательная тема! Что именно вас интересует? 💭",
    "Отличный вопрос! Могу поискать информацию по этой теме. 🔍",
    "Понимаю! Это действительно интересно. Расскажите подробнее? 🌟",
    "Хороший вопрос! Давайте разберёмся вместе. 🎯",
];

pub static DEFAULTS_EN: [&str; 5] = [
    "Interesting question! Let me think... 🤔",
    "That's a fascinating topic! What specifically interests you? 💭",
    "Great question! I can search for information on this. 🔍",
    "I see! That's really interesting. Tell me more? 🌟",
    "Good question! Let's figure it out together. 🎯",
];

/// The reply set `text` (already lower-cased) falls into.
pub fn candidates(text: &str, lang: Lang) -> &'static [&'static str] {
    let (table, defaults): (Table, &'static [&'static str]) = match lang {
        Lang::Ru => (REPLIES_RU, DEFAULTS_RU.as_slice()),
        Lang::En => (REPLIES_EN, DEFAULTS_EN.as_slice()),
    };
    table
        .iter()
        .find(|(kw, _)| text.contains(kw))
        .map_or(defaults, |(_, replies)| replies.as_slice())
}

pub fn reply<R: Rng + ?Sized>(text: &str, lang: Lang, rng: &mut R) -> &'static str {
    candidates(text, lang)
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULTS_EN[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::respond_canned;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn greeting_is_one_of_three() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let r = respond_canned("Привет, бот", Lang::Ru, &mut rng);
            assert!(REPLIES_RU[0].1.contains(&r.as_str()), "{r}");
        }
    }

    #[test]
    fn unmatched_falls_back_to_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = respond_canned("quantum chromodynamics", Lang::En, &mut rng);
        assert!(DEFAULTS_EN.contains(&r.as_str()));
    }

    #[test]
    fn table_order_decides_ties() {
        // "thank you for the help" hits "thank you" before "help"
        assert_eq!(candidates("thank you for the help", Lang::En), REPLIES_EN[3].1.as_slice());
    }

    #[test]
    fn language_selects_table() {
        // english keyword in a russian-tagged request is not matched
        assert_eq!(candidates("hello", Lang::Ru), DEFAULTS_RU.as_slice());
    }

    #[test]
    fn same_seed_same_reply() {
        let a = respond_canned("help", Lang::En, &mut StdRng::seed_from_u64(42));
        let b = respond_canned("help", Lang::En, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_reply_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(reply("как дела?", Lang::Ru, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }
}
