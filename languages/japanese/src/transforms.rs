//! Deinflection rule set for Japanese.
//!
//! Conditions follow the usual dictionary taxonomy: `v1` ichidan verbs,
//! `v5` godan verbs, `vk` 来る, `vs` する, `adj-i` i-adjectives. The
//! intermediate conditions (`-て`, `-た`, `-ます`, ...) exist so chained
//! endings deinflect step by step: 食べませんでした strips to 食べません,
//! then 食べます, then 食べる.

use wakaru_transform::{ConditionSpec, LanguageDescriptor, RuleSpec, TransformSpec};

fn suffix(
    inflected: &str,
    deinflected: &str,
    conditions_in: &[&str],
    conditions_out: &[&str],
) -> RuleSpec {
    RuleSpec::suffix(inflected, deinflected, conditions_in, conditions_out)
}

fn transform(name: &str, description: &str, rules: Vec<RuleSpec>) -> TransformSpec {
    TransformSpec {
        name: name.to_string(),
        description: Some(description.to_string()),
        rules,
    }
}

/// The shipped Japanese language descriptor
pub fn descriptor() -> LanguageDescriptor {
    LanguageDescriptor {
        language: "ja".to_string(),
        conditions: conditions(),
        transforms: transforms(),
    }
}

fn conditions() -> Vec<ConditionSpec> {
    vec![
        ConditionSpec::composite("v", "Verb", &["v1", "v5", "vk", "vs"]),
        ConditionSpec::primitive("v1", "Ichidan verb", true),
        ConditionSpec::primitive("v5", "Godan verb", true),
        ConditionSpec::primitive("vk", "Kuru verb", true),
        ConditionSpec::primitive("vs", "Suru verb", true),
        ConditionSpec::primitive("adj-i", "Adjective with i ending", true),
        ConditionSpec::primitive("-て", "Intermediate -て ending", false),
        ConditionSpec::primitive("-た", "Intermediate -た ending", false),
        ConditionSpec::primitive("-ます", "Polite -ます ending", false),
        ConditionSpec::primitive("-ません", "Polite negative -ません ending", false),
        ConditionSpec::primitive("-ば", "Intermediate -ば conditional ending", false),
        ConditionSpec::primitive("-く", "Intermediate -く adverbial ending", false),
    ]
}

fn transforms() -> Vec<TransformSpec> {
    vec![
        transform(
            "-ば",
            "Conditional form; the latter clause holds once the former does",
            vec![
                suffix("ければ", "い", &["-ば"], &["adj-i"]),
                suffix("えば", "う", &["-ば"], &["v5"]),
                suffix("けば", "く", &["-ば"], &["v5"]),
                suffix("げば", "ぐ", &["-ば"], &["v5"]),
                suffix("せば", "す", &["-ば"], &["v5"]),
                suffix("てば", "つ", &["-ば"], &["v5"]),
                suffix("ねば", "ぬ", &["-ば"], &["v5"]),
                suffix("べば", "ぶ", &["-ば"], &["v5"]),
                suffix("めば", "む", &["-ば"], &["v5"]),
                suffix("れば", "る", &["-ば"], &["v1", "v5", "vk", "vs"]),
            ],
        ),
        transform(
            "-て",
            "Connective form; links clauses and carries requests and aspect",
            vec![
                suffix("くて", "い", &["-て"], &["adj-i"]),
                suffix("て", "る", &["-て"], &["v1"]),
                suffix("いて", "く", &["-て"], &["v5"]),
                suffix("いで", "ぐ", &["-て"], &["v5"]),
                suffix("して", "す", &["-て"], &["v5"]),
                suffix("って", "う", &["-て"], &["v5"]),
                suffix("って", "つ", &["-て"], &["v5"]),
                suffix("って", "る", &["-て"], &["v5"]),
                suffix("んで", "ぬ", &["-て"], &["v5"]),
                suffix("んで", "ぶ", &["-て"], &["v5"]),
                suffix("んで", "む", &["-て"], &["v5"]),
                suffix("きて", "くる", &["-て"], &["vk"]),
                suffix("して", "する", &["-て"], &["vs"]),
            ],
        ),
        transform(
            "-た",
            "Past tense; also completed or confirmed state",
            vec![
                suffix("かった", "い", &["-た"], &["adj-i"]),
                suffix("た", "る", &["-た"], &["v1"]),
                suffix("いた", "く", &["-た"], &["v5"]),
                suffix("いだ", "ぐ", &["-た"], &["v5"]),
                suffix("した", "す", &["-た"], &["v5"]),
                suffix("った", "う", &["-た"], &["v5"]),
                suffix("った", "つ", &["-た"], &["v5"]),
                suffix("った", "る", &["-た"], &["v5"]),
                suffix("んだ", "ぬ", &["-た"], &["v5"]),
                suffix("んだ", "ぶ", &["-た"], &["v5"]),
                suffix("んだ", "む", &["-た"], &["v5"]),
                suffix("きた", "くる", &["-た"], &["vk"]),
                suffix("した", "する", &["-た"], &["vs"]),
                suffix("ました", "ます", &["-た"], &["-ます"]),
                suffix("ませんでした", "ません", &["-た"], &["-ません"]),
            ],
        ),
        transform(
            "-ます",
            "Polite conjugation; attaches to the verb stem",
            vec![
                suffix("ます", "る", &["-ます"], &["v1"]),
                suffix("きます", "く", &["-ます"], &["v5"]),
                suffix("ぎます", "ぐ", &["-ます"], &["v5"]),
                suffix("します", "す", &["-ます"], &["v5"]),
                suffix("ちます", "つ", &["-ます"], &["v5"]),
                suffix("にます", "ぬ", &["-ます"], &["v5"]),
                suffix("びます", "ぶ", &["-ます"], &["v5"]),
                suffix("みます", "む", &["-ます"], &["v5"]),
                suffix("います", "う", &["-ます"], &["v5"]),
                suffix("ります", "る", &["-ます"], &["v5"]),
                suffix("きます", "くる", &["-ます"], &["vk"]),
                suffix("します", "する", &["-ます"], &["vs"]),
            ],
        ),
        transform(
            "negative",
            "Plain negative; the -ない form itself conjugates like an i-adjective",
            vec![
                suffix("くない", "い", &["adj-i"], &["adj-i"]),
                suffix("ない", "る", &["adj-i"], &["v1"]),
                suffix("かない", "く", &["adj-i"], &["v5"]),
                suffix("がない", "ぐ", &["adj-i"], &["v5"]),
                suffix("さない", "す", &["adj-i"], &["v5"]),
                suffix("たない", "つ", &["adj-i"], &["v5"]),
                suffix("なない", "ぬ", &["adj-i"], &["v5"]),
                suffix("ばない", "ぶ", &["adj-i"], &["v5"]),
                suffix("まない", "む", &["adj-i"], &["v5"]),
                suffix("らない", "る", &["adj-i"], &["v5"]),
                suffix("わない", "う", &["adj-i"], &["v5"]),
                suffix("こない", "くる", &["adj-i"], &["vk"]),
                suffix("しない", "する", &["adj-i"], &["vs"]),
                suffix("ません", "ます", &["-ません"], &["-ます"]),
            ],
        ),
        transform(
            "-ている",
            "Progressive or resultant state; the て-form plus いる",
            vec![
                suffix("ている", "て", &["v1"], &["-て"]),
                suffix("でいる", "で", &["v1"], &["-て"]),
                suffix("てる", "て", &["v1"], &["-て"]),
                suffix("でる", "で", &["v1"], &["-て"]),
            ],
        ),
        transform(
            "-たら",
            "Conditional; once the former happens, the latter follows",
            vec![
                suffix("かったら", "い", &["-た"], &["adj-i"]),
                suffix("たら", "る", &["-た"], &["v1"]),
                suffix("いたら", "く", &["-た"], &["v5"]),
                suffix("いだら", "ぐ", &["-た"], &["v5"]),
                suffix("したら", "す", &["-た"], &["v5"]),
                suffix("ったら", "う", &["-た"], &["v5"]),
                suffix("ったら", "つ", &["-た"], &["v5"]),
                suffix("ったら", "る", &["-た"], &["v5"]),
                suffix("んだら", "ぬ", &["-た"], &["v5"]),
                suffix("んだら", "ぶ", &["-た"], &["v5"]),
                suffix("んだら", "む", &["-た"], &["v5"]),
                suffix("きたら", "くる", &["-た"], &["vk"]),
                suffix("したら", "する", &["-た"], &["vs"]),
            ],
        ),
        transform(
            "-たり",
            "Non-exhaustive listing of actions or states",
            vec![
                suffix("かったり", "い", &["-た"], &["adj-i"]),
                suffix("たり", "る", &["-た"], &["v1"]),
                suffix("いたり", "く", &["-た"], &["v5"]),
                suffix("いだり", "ぐ", &["-た"], &["v5"]),
                suffix("したり", "す", &["-た"], &["v5"]),
                suffix("ったり", "う", &["-た"], &["v5"]),
                suffix("ったり", "つ", &["-た"], &["v5"]),
                suffix("ったり", "る", &["-た"], &["v5"]),
                suffix("んだり", "ぬ", &["-た"], &["v5"]),
                suffix("んだり", "ぶ", &["-た"], &["v5"]),
                suffix("んだり", "む", &["-た"], &["v5"]),
                suffix("きたり", "くる", &["-た"], &["vk"]),
                suffix("したり", "する", &["-た"], &["vs"]),
            ],
        ),
        transform(
            "-く",
            "Adverbial form of i-adjectives",
            vec![suffix("く", "い", &["-く"], &["adj-i"])],
        ),
        transform(
            "-たい",
            "Desiderative; wanting to do, conjugates like an i-adjective",
            vec![
                suffix("たい", "る", &["adj-i"], &["v1"]),
                suffix("きたい", "く", &["adj-i"], &["v5"]),
                suffix("ぎたい", "ぐ", &["adj-i"], &["v5"]),
                suffix("したい", "す", &["adj-i"], &["v5"]),
                suffix("ちたい", "つ", &["adj-i"], &["v5"]),
                suffix("にたい", "ぬ", &["adj-i"], &["v5"]),
                suffix("びたい", "ぶ", &["adj-i"], &["v5"]),
                suffix("みたい", "む", &["adj-i"], &["v5"]),
                suffix("いたい", "う", &["adj-i"], &["v5"]),
                suffix("りたい", "る", &["adj-i"], &["v5"]),
                suffix("きたい", "くる", &["adj-i"], &["vk"]),
                suffix("したい", "する", &["adj-i"], &["vs"]),
            ],
        ),
        transform(
            "passive",
            "Passive or honorific; the result conjugates as an ichidan verb",
            vec![
                suffix("られる", "る", &["v1"], &["v1", "v5"]),
                suffix("かれる", "く", &["v1"], &["v5"]),
                suffix("がれる", "ぐ", &["v1"], &["v5"]),
                suffix("される", "す", &["v1"], &["v5"]),
                suffix("たれる", "つ", &["v1"], &["v5"]),
                suffix("なれる", "ぬ", &["v1"], &["v5"]),
                suffix("ばれる", "ぶ", &["v1"], &["v5"]),
                suffix("まれる", "む", &["v1"], &["v5"]),
                suffix("われる", "う", &["v1"], &["v5"]),
                suffix("される", "する", &["v1"], &["vs"]),
                suffix("こられる", "くる", &["v1"], &["vk"]),
            ],
        ),
        transform(
            "potential",
            "Potential form of godan verbs; the result conjugates as ichidan",
            vec![
                suffix("える", "う", &["v1"], &["v5"]),
                suffix("ける", "く", &["v1"], &["v5"]),
                suffix("げる", "ぐ", &["v1"], &["v5"]),
                suffix("せる", "す", &["v1"], &["v5"]),
                suffix("てる", "つ", &["v1"], &["v5"]),
                suffix("ねる", "ぬ", &["v1"], &["v5"]),
                suffix("べる", "ぶ", &["v1"], &["v5"]),
                suffix("める", "む", &["v1"], &["v5"]),
                suffix("れる", "る", &["v1"], &["v5"]),
                suffix("できる", "する", &["v1"], &["vs"]),
            ],
        ),
        transform(
            "causative",
            "Making or letting someone do; conjugates as ichidan",
            vec![
                suffix("させる", "る", &["v1"], &["v1"]),
                suffix("かせる", "く", &["v1"], &["v5"]),
                suffix("がせる", "ぐ", &["v1"], &["v5"]),
                suffix("させる", "す", &["v1"], &["v5"]),
                suffix("たせる", "つ", &["v1"], &["v5"]),
                suffix("なせる", "ぬ", &["v1"], &["v5"]),
                suffix("ばせる", "ぶ", &["v1"], &["v5"]),
                suffix("ませる", "む", &["v1"], &["v5"]),
                suffix("らせる", "る", &["v1"], &["v5"]),
                suffix("わせる", "う", &["v1"], &["v5"]),
                suffix("させる", "する", &["v1"], &["vs"]),
                suffix("こさせる", "くる", &["v1"], &["vk"]),
            ],
        ),
        transform(
            "imperative",
            "Direct command form",
            vec![
                suffix("ろ", "る", &[], &["v1"]),
                suffix("よ", "る", &[], &["v1"]),
                suffix("え", "う", &[], &["v5"]),
                suffix("け", "く", &[], &["v5"]),
                suffix("げ", "ぐ", &[], &["v5"]),
                suffix("せ", "す", &[], &["v5"]),
                suffix("て", "つ", &[], &["v5"]),
                suffix("ね", "ぬ", &[], &["v5"]),
                suffix("べ", "ぶ", &[], &["v5"]),
                suffix("め", "む", &[], &["v5"]),
                suffix("れ", "る", &[], &["v5"]),
                suffix("しろ", "する", &[], &["vs"]),
                suffix("せよ", "する", &[], &["vs"]),
                suffix("こい", "くる", &[], &["vk"]),
            ],
        ),
        transform(
            "volitional",
            "Let's-do or presumptive form",
            vec![
                suffix("よう", "る", &[], &["v1"]),
                suffix("おう", "う", &[], &["v5"]),
                suffix("こう", "く", &[], &["v5"]),
                suffix("ごう", "ぐ", &[], &["v5"]),
                suffix("そう", "す", &[], &["v5"]),
                suffix("とう", "つ", &[], &["v5"]),
                suffix("のう", "ぬ", &[], &["v5"]),
                suffix("ぼう", "ぶ", &[], &["v5"]),
                suffix("もう", "む", &[], &["v5"]),
                suffix("ろう", "る", &[], &["v5"]),
                suffix("しよう", "する", &[], &["vs"]),
                suffix("こよう", "くる", &[], &["vk"]),
            ],
        ),
        transform(
            "-ず",
            "Formal negative; without doing",
            vec![
                suffix("ず", "る", &[], &["v1"]),
                suffix("かず", "く", &[], &["v5"]),
                suffix("がず", "ぐ", &[], &["v5"]),
                suffix("さず", "す", &[], &["v5"]),
                suffix("たず", "つ", &[], &["v5"]),
                suffix("なず", "ぬ", &[], &["v5"]),
                suffix("ばず", "ぶ", &[], &["v5"]),
                suffix("まず", "む", &[], &["v5"]),
                suffix("らず", "る", &[], &["v5"]),
                suffix("わず", "う", &[], &["v5"]),
                suffix("せず", "する", &[], &["vs"]),
                suffix("こず", "くる", &[], &["vk"]),
            ],
        ),
    ]
}
