//! Deterministic markdown answers, one generator per category.

use super::{Lang, Query, EXPLAIN};

/* ------------------------------ greeting ----------------------------- */

const GREETING_RU: &str = "Привет! 👋 Я NeuroPulse, AI-помощник для учёбы.

**Что я умею:**
- 📐 Решать задачи по математике, физике и химии
- 💻 Объяснять программирование и писать примеры кода
- ✍️ Помогать с сочинениями, эссе и рефератами
- 🌍 Подсказывать с переводом
- 📊 Составлять таблицы и сравнения
- 🏃 Давать советы по спорту и тренировкам

Задайте вопрос, и начнём!";

const GREETING_EN: &str = "Hello! 👋 I'm NeuroPulse, your study assistant.

**What I can do:**
- 📐 Solve math, physics and chemistry problems
- 💻 Explain programming and write code examples
- ✍️ Help with essays, compositions and reports
- 🌍 Help with translations
- 📊 Build tables and comparisons
- 🏃 Give sport and workout tips

Ask me anything and let's get started!";

pub fn greeting(q: &Query) -> String {
    pick(q.lang, GREETING_RU, GREETING_EN).to_string()
}

/* ------------------------------- sport ------------------------------- */

const SPORT_RU: &str = "🏃 **Спорт и тренировки**

**Базовый план на неделю:**
| День | Тренировка | Длительность |
|------|------------|--------------|
| Пн | Кардио (бег, велосипед) | 30 мин |
| Ср | Силовая: приседания, отжимания, планка | 40 мин |
| Пт | Интервальная тренировка | 25 мин |
| Вс | Растяжка, йога | 20 мин |

**Главные правила:**
1. Разминка 5–10 минут перед каждой тренировкой
2. Нагрузку увеличивайте постепенно, на 5–10% в неделю
3. Пейте воду и спите не меньше 8 часов
4. Между силовыми тренировками отдыхайте 48 часов

Напишите, какой вид спорта вас интересует, и я расскажу подробнее!";

const SPORT_EN: &str = "🏃 **Sport and training**

**A basic weekly plan:**
| Day | Workout | Duration |
|-----|---------|----------|
| Mon | Cardio (running, cycling) | 30 min |
| Wed | Strength: squats, push-ups, plank | 40 min |
| Fri | Interval training | 25 min |
| Sun | Stretching, yoga | 20 min |

**Key rules:**
1. Warm up for 5–10 minutes before every session
2. Increase the load gradually, 5–10% per week
3. Drink water and sleep at least 8 hours
4. Rest 48 hours between strength sessions

Tell me which sport interests you and I'll go into detail!";

pub fn sport(q: &Query) -> String {
    pick(q.lang, SPORT_RU, SPORT_EN).to_string()
}

/* -------------------------------- math ------------------------------- */

const QUADRATIC_RU: &str = "📐 **Квадратное уравнение**

Общий вид: **ax² + bx + c = 0**

**Пример:** x² − 5x + 6 = 0

**Шаг 1.** Коэффициенты: a = 1, b = −5, c = 6

**Шаг 2.** Дискриминант:
D = b² − 4ac = (−5)² − 4·1·6 = 25 − 24 = 1

**Шаг 3.** D > 0, значит два корня:
x = (−b ± √D) / 2a

x₁ = (5 + 1) / 2 = **3**
x₂ = (5 − 1) / 2 = **2**

**Проверка:** 3² − 5·3 + 6 = 0 ✅

**Запомните:**
- D > 0: два корня
- D = 0: один корень x = −b / 2a
- D < 0: действительных корней нет

Пришлите своё уравнение, и я решу его по шагам!";

const QUADRATIC_EN: &str = "📐 **Quadratic equation**

General form: **ax² + bx + c = 0**

**Example:** x² − 5x + 6 = 0

**Step 1.** Coefficients: a = 1, b = −5, c = 6

**Step 2.** Discriminant:
D = b² − 4ac = (−5)² − 4·1·6 = 25 − 24 = 1

**Step 3.** D > 0, so there are two roots:
x = (−b ± √D) / 2a

x₁ = (5 + 1) / 2 = **3**
x₂ = (5 − 1) / 2 = **2**

**Check:** 3² − 5·3 + 6 = 0 ✅

**Remember:**
- D > 0: two roots
- D = 0: one root x = −b / 2a
- D < 0: no real roots

Send me your equation and I'll solve it step by step!";

const PERCENT_RU: &str = "📐 **Проценты**

**Пример:** найдите 15% от 240.

**Шаг 1.** 1% = 240 / 100 = 2,4
**Шаг 2.** 15% = 2,4 · 15 = **36**

**Полезные формулы:**
- Часть от числа: A · p / 100
- Сколько процентов A составляет от B: A / B · 100%
- Число после увеличения на p%: A · (1 + p / 100)

Пришлите свою задачу, и я разберу её!";

const PERCENT_EN: &str = "📐 **Percentages**

**Example:** find 15% of 240.

**Step 1.** 1% = 240 / 100 = 2.4
**Step 2.** 15% = 2.4 · 15 = **36**

**Handy formulas:**
- Part of a number: A · p / 100
- What percent A is of B: A / B · 100%
- A number increased by p%: A · (1 + p / 100)

Send me your problem and I'll work through it!";

const MATH_RU: &str = "📐 **Математика**

Я помогу с:
- уравнениями (линейными, квадратными, системами)
- дробями и процентами
- геометрией: площади, периметры, теорема Пифагора
- производными и интегралами

Уточните задачу: напишите само уравнение или условие, например
«реши квадратное уравнение x² − 5x + 6 = 0».";

const MATH_EN: &str = "📐 **Math**

I can help with:
- equations (linear, quadratic, systems)
- fractions and percentages
- geometry: areas, perimeters, the Pythagorean theorem
- derivatives and integrals

Please be more specific: send the equation or the problem itself, e.g.
\"solve the quadratic equation x² − 5x + 6 = 0\".";

pub fn math(q: &Query) -> String {
    let text = if q.has_any(&["квадратн", "quadratic", "x²", "x^2"]) {
        pick(q.lang, QUADRATIC_RU, QUADRATIC_EN)
    } else if q.has_any(&["процент", "percent", "%"]) {
        pick(q.lang, PERCENT_RU, PERCENT_EN)
    } else {
        pick(q.lang, MATH_RU, MATH_EN)
    };
    text.to_string()
}

/* ------------------------------ physics ------------------------------ */

const SPEED_RU: &str = "⚡ **Скорость**

Формула: **v = s / t**, где s — путь, t — время.

**Пример:** автомобиль проехал 180 км за 2 часа.
v = 180 км / 2 ч = **90 км/ч**

В СИ: 90 км/ч = 90 · 1000 / 3600 = **25 м/с**

**Связанные формулы:**
- путь: s = v · t
- время: t = s / v
- равноускоренное движение: v = v₀ + a·t";

const SPEED_EN: &str = "⚡ **Speed**

Formula: **v = s / t**, where s is distance and t is time.

**Example:** a car covers 180 km in 2 hours.
v = 180 km / 2 h = **90 km/h**

In SI units: 90 km/h = 90 · 1000 / 3600 = **25 m/s**

**Related formulas:**
- distance: s = v · t
- time: t = s / v
- uniform acceleration: v = v₀ + a·t";

const PHYSICS_RU: &str = "⚡ **Физика**

**Основные формулы:**
| Величина | Формула | Единица |
|----------|---------|---------|
| Скорость | v = s / t | м/с |
| Сила (2-й закон Ньютона) | F = m·a | Н |
| Кинетическая энергия | E = m·v² / 2 | Дж |
| Закон Ома | I = U / R | А |
| Давление | p = F / S | Па |

Напишите условие задачи, и я решу её по шагам!";

const PHYSICS_EN: &str = "⚡ **Physics**

**Core formulas:**
| Quantity | Formula | Unit |
|----------|---------|------|
| Speed | v = s / t | m/s |
| Force (Newton's 2nd law) | F = m·a | N |
| Kinetic energy | E = m·v² / 2 | J |
| Ohm's law | I = U / R | A |
| Pressure | p = F / S | Pa |

Send me the problem statement and I'll solve it step by step!";

pub fn physics(q: &Query) -> String {
    let text = if q.has_any(&["скорост", "speed", "velocity"]) {
        pick(q.lang, SPEED_RU, SPEED_EN)
    } else {
        pick(q.lang, PHYSICS_RU, PHYSICS_EN)
    };
    text.to_string()
}

/* ----------------------------- chemistry ----------------------------- */

const MOLAR_RU: &str = "🧪 **Молярная масса**

**Пример:** молярная масса воды H₂O.

**Шаг 1.** Атомные массы: H = 1, O = 16
**Шаг 2.** M(H₂O) = 2·1 + 16 = **18 г/моль**

**Количество вещества:** n = m / M
Например, 36 г воды: n = 36 / 18 = **2 моль**";

const MOLAR_EN: &str = "🧪 **Molar mass**

**Example:** the molar mass of water, H₂O.

**Step 1.** Atomic masses: H = 1, O = 16
**Step 2.** M(H₂O) = 2·1 + 16 = **18 g/mol**

**Amount of substance:** n = m / M
For 36 g of water: n = 36 / 18 = **2 mol**";

const CHEMISTRY_RU: &str = "🧪 **Химия**

Я помогу:
- расставить коэффициенты в уравнениях реакций
- посчитать молярную массу и количество вещества
- определить тип реакции (соединение, разложение, замещение, обмен)
- разобраться с валентностью и таблицей Менделеева

**Пример уравнения:** 2H₂ + O₂ → 2H₂O

Напишите реакцию или задачу целиком!";

const CHEMISTRY_EN: &str = "🧪 **Chemistry**

I can help you:
- balance chemical equations
- compute molar mass and amount of substance
- identify reaction types (synthesis, decomposition, replacement, exchange)
- work with valence and the periodic table

**Example equation:** 2H₂ + O₂ → 2H₂O

Send me the full reaction or problem!";

pub fn chemistry(q: &Query) -> String {
    let text = if q.has_any(&["молярн", "molar"]) {
        pick(q.lang, MOLAR_RU, MOLAR_EN)
    } else {
        pick(q.lang, CHEMISTRY_RU, CHEMISTRY_EN)
    };
    text.to_string()
}

/* ---------------------------- programming ---------------------------- */

const PYTHON_RU: &str = "💻 **Python: пример**

```python
def fizzbuzz(n):
    for i in range(1, n + 1):
        if i % 15 == 0:
            print(\"FizzBuzz\")
        elif i % 3 == 0:
            print(\"Fizz\")
        elif i % 5 == 0:
            print(\"Buzz\")
        else:
            print(i)

fizzbuzz(15)
```

**Что здесь происходит:**
1. `def` объявляет функцию
2. `range(1, n + 1)` перебирает числа от 1 до n
3. `%` даёт остаток от деления

Опишите свою задачу, и я напишу код под неё!";

const PYTHON_EN: &str = "💻 **Python example**

```python
def fizzbuzz(n):
    for i in range(1, n + 1):
        if i % 15 == 0:
            print(\"FizzBuzz\")
        elif i % 3 == 0:
            print(\"Fizz\")
        elif i % 5 == 0:
            print(\"Buzz\")
        else:
            print(i)

fizzbuzz(15)
```

**What happens here:**
1. `def` declares a function
2. `range(1, n + 1)` walks the numbers 1 to n
3. `%` gives the remainder of a division

Describe your task and I'll write code for it!";

const PROGRAMMING_RU: &str = "💻 **Программирование**

Я помогу:
- написать функцию или небольшую программу
- объяснить алгоритм (сортировки, поиск, рекурсия)
- найти ошибку в коде
- разобраться с Python, JavaScript и другими языками

Напишите язык и задачу, например: «напиши на Python функцию, которая считает сумму списка».";

const PROGRAMMING_EN: &str = "💻 **Programming**

I can help you:
- write a function or a small program
- explain an algorithm (sorting, searching, recursion)
- find a bug in your code
- get to grips with Python, JavaScript and other languages

Tell me the language and the task, e.g. \"write a Python function that sums a list\".";

pub fn programming(q: &Query) -> String {
    let text = if q.has_any(&["python", "питон"]) {
        pick(q.lang, PYTHON_RU, PYTHON_EN)
    } else {
        pick(q.lang, PROGRAMMING_RU, PROGRAMMING_EN)
    };
    text.to_string()
}

/* -------------------------------- essay ------------------------------ */

pub fn essay(q: &Query) -> String {
    let topic = topic_after(q.text, &["на тему", "про", "об", "о", "about", "on"]);
    match q.lang {
        Lang::Ru => {
            let topic = topic.unwrap_or_else(|| "выбранную тему".into());
            format!(
                "✍️ **План сочинения на тему «{topic}»**

**1. Вступление** (3–4 предложения)
- Почему тема «{topic}» важна
- Главная мысль (тезис)

**2. Основная часть** (2–3 абзаца)
- Аргумент 1 и пример
- Аргумент 2 и пример
- Контраргумент и его опровержение

**3. Заключение** (2–3 предложения)
- Вывод, подтверждающий тезис
- Личное отношение к теме

💡 Совет: каждый абзац начинайте с ключевой мысли, а примеры берите из литературы или жизни."
            )
        }
        Lang::En => {
            let topic = topic.unwrap_or_else(|| "your topic".into());
            format!(
                "✍️ **Essay outline: \"{topic}\"**

**1. Introduction** (3–4 sentences)
- Why \"{topic}\" matters
- Your main claim (thesis)

**2. Body** (2–3 paragraphs)
- Argument 1 with an example
- Argument 2 with an example
- A counterargument and its rebuttal

**3. Conclusion** (2–3 sentences)
- A takeaway that confirms the thesis
- Your personal view on the topic

💡 Tip: open every paragraph with its key idea, and take examples from literature or real life."
            )
        }
    }
}

/* ----------------------------- translation --------------------------- */

/// A handful of words the offline responder can translate by itself.
const DICTIONARY: &[(&str, &str)] = &[
    ("привет", "hello"),
    ("спасибо", "thank you"),
    ("кошка", "cat"),
    ("собака", "dog"),
    ("книга", "book"),
    ("школа", "school"),
    ("учитель", "teacher"),
    ("друг", "friend"),
    ("дом", "house"),
    ("вода", "water"),
];

fn lookup(phrase: &str) -> Option<(&'static str, &'static str)> {
    DICTIONARY
        .iter()
        .find(|(ru, en)| *ru == phrase || *en == phrase)
        .copied()
}

pub fn translation(q: &Query) -> String {
    let phrase = topic_after(q.text, &["слово", "фразу", "word", "phrase", "переведи", "перевод", "translate"])
        .map(|p| strip_target(&p));
    let known = phrase.as_deref().and_then(lookup);

    match (q.lang, known) {
        (Lang::Ru, Some((ru, en))) => format!("🌍 **Перевод**\n\n**{ru}** (рус.) = **{en}** (англ.)"),
        (Lang::En, Some((ru, en))) => format!("🌍 **Translation**\n\n**{en}** (English) = **{ru}** (Russian)"),
        (Lang::Ru, None) => {
            let what = phrase.map(|p| format!("«{p}»")).unwrap_or_else(|| "текст".into());
            format!(
                "🌍 **Перевод**

Вы хотите перевести {what}.

Чтобы перевод был точным, укажите:
1. С какого языка и на какой переводить
2. Контекст: учебный текст, письмо, разговорная речь
3. Нужен дословный или литературный перевод

Пример запроса: «переведи на английский: я люблю читать»."
            )
        }
        (Lang::En, None) => {
            let what = phrase.map(|p| format!("\"{p}\"")).unwrap_or_else(|| "some text".into());
            format!(
                "🌍 **Translation**

You'd like to translate {what}.

For an accurate translation, tell me:
1. The source and target languages
2. The context: homework, a letter, casual speech
3. Whether you need a literal or a literary translation

Example: \"translate into Russian: I love reading\"."
            )
        }
    }
}

/// Drops a trailing "на английский" / "into russian" from a phrase.
fn strip_target(phrase: &str) -> String {
    ["на английский", "на русский", "into english", "into russian", "to english", "to russian"]
        .iter()
        .fold(phrase.to_string(), |p, suffix| {
            p.trim_end_matches(suffix).trim().to_string()
        })
}

/* -------------------------------- table ------------------------------ */

const TABLE_RU: &str = "📊 **Таблица сравнения**

| Критерий | Вариант A | Вариант B |
|----------|-----------|-----------|
| Описание | ... | ... |
| Преимущества | ... | ... |
| Недостатки | ... | ... |
| Пример | ... | ... |

Напишите, что именно сравнить (например, «сравни Python и JavaScript»), и я заполню таблицу.";

const TABLE_EN: &str = "📊 **Comparison table**

| Criterion | Option A | Option B |
|-----------|----------|----------|
| Description | ... | ... |
| Advantages | ... | ... |
| Drawbacks | ... | ... |
| Example | ... | ... |

Tell me what to compare (e.g. \"compare Python and JavaScript\") and I'll fill it in.";

pub fn table(q: &Query) -> String {
    pick(q.lang, TABLE_RU, TABLE_EN).to_string()
}

/* ------------------------------ explain ------------------------------ */

pub fn explain(q: &Query) -> String {
    let subject = topic_after(q.text, EXPLAIN);
    match (q.lang, subject) {
        (Lang::Ru, Some(s)) => format!(
            "💡 **{s}**

Чтобы объяснить понятие «{s}», разберём его по плану:
1. **Определение**: что это такое в одном предложении
2. **Ключевые свойства**: чем отличается от похожих понятий
3. **Пример** из учебника или жизни
4. **Где применяется**

Уточните предмет (история, биология, информатика…), и я дам точное определение с примерами."
        ),
        (Lang::En, Some(s)) => format!(
            "💡 **{s}**

To explain \"{s}\", let's go through it step by step:
1. **Definition**: what it is in one sentence
2. **Key properties**: how it differs from similar ideas
3. **An example** from a textbook or real life
4. **Where it's used**

Tell me the subject (history, biology, computer science…) and I'll give a precise definition with examples."
        ),
        (_, None) => fallback(q),
    }
}

/* ------------------------------ fallback ----------------------------- */

const FALLBACK_RU: &str = "🤔 Интересный вопрос! Чтобы ответить точнее, уточните:
- **Предмет**: математика, физика, химия, программирование, литература…
- **Что нужно**: решить задачу, объяснить тему, составить таблицу, написать текст
- **Условие**: сама задача или вопрос целиком

Например: «реши квадратное уравнение x² − 5x + 6 = 0» или «что такое фотосинтез».";

const FALLBACK_EN: &str = "🤔 Interesting question! To give a precise answer, please tell me:
- **The subject**: math, physics, chemistry, programming, literature…
- **What you need**: solve a problem, explain a topic, build a table, write a text
- **The details**: the full problem or question

For example: \"solve the quadratic equation x² − 5x + 6 = 0\" or \"what is photosynthesis\".";

pub fn fallback(q: &Query) -> String {
    pick(q.lang, FALLBACK_RU, FALLBACK_EN).to_string()
}

/* ------------------------------ helpers ------------------------------ */

fn pick(lang: Lang, ru: &'static str, en: &'static str) -> &'static str {
    match lang {
        Lang::Ru => ru,
        Lang::En => en,
    }
}

/// Text after the first marker found, trimmed of punctuation.
///
/// Single-word markers only match as whole words.
fn topic_after(text: &str, markers: &[&str]) -> Option<String> {
    markers.iter().find_map(|m| {
        let start = marker_end(text, m)?;
        let rest = text[start..]
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, '?' | '!' | '.' | ',' | ':' | '«' | '»' | '"'));
        (!rest.is_empty()).then(|| rest.to_string())
    })
}

fn marker_end(text: &str, marker: &str) -> Option<usize> {
    if marker.contains(' ') {
        return text.find(marker).map(|i| i + marker.len());
    }
    let mut from = 0;
    while let Some(i) = text[from..].find(marker).map(|i| i + from) {
        let end = i + marker.len();
        let before_ok = text[..i].chars().next_back().map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(end);
        }
        from = end;
    }
    None
}
