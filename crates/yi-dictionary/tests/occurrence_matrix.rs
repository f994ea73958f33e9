use proptest::prelude::*;
use serde_json::json;
use yi_dictionary::{
    find_occurrences, find_occurrences_with, link_words, word_fragments, DictionaryEntry,
    DictionaryIndex, DictionarySentence, DocumentLink, Occurrence, ScanOptions, SentenceLinks,
};
use yi_document::{
    Fragment, FragmentKind, FragmentType, Fragmentable, Id, Range, SentenceFragment,
};

fn keys<E: AsRef<str>>(occurrence: &Occurrence<E>) -> Vec<&str> {
    occurrence.entries.iter().map(|e| e.as_ref()).collect()
}

#[test]
fn single_hit_in_sentence() {
    let dictionary = vec![DictionaryEntry::new("cat", "en"), DictionaryEntry::new("dog", "en")];
    let hits = find_occurrences(dictionary.clone(), "the cat sat");

    assert_eq!(
        hits,
        vec![Occurrence {
            position: 4,
            entries: vec![dictionary[0].clone()],
        }]
    );
}

#[test]
fn nested_and_repeated_keys() {
    let hits = find_occurrences(["a", "ab", "b"], "abab");
    let got: Vec<(usize, Vec<&str>)> = hits.iter().map(|o| (o.position, keys(o))).collect();
    assert_eq!(
        got,
        vec![
            (0, vec!["a", "ab"]),
            (1, vec!["b"]),
            (2, vec!["a", "ab"]),
            (3, vec!["b"]),
        ]
    );
}

#[test]
fn positions_are_character_offsets() {
    let hits = find_occurrences(["猫", "好き"], "私は猫が好きです");
    let got: Vec<(usize, Vec<&str>)> = hits.iter().map(|o| (o.position, keys(o))).collect();
    assert_eq!(got, vec![(2, vec!["猫"]), (4, vec!["好き"])]);
}

#[test]
fn empty_inputs_yield_nothing() {
    assert!(find_occurrences(Vec::<String>::new(), "some text").is_empty());
    assert!(find_occurrences(["x"], "").is_empty());
    assert!(find_occurrences([""], "anything").is_empty());
}

#[test]
fn longest_match_only_option() {
    let options = ScanOptions {
        longest_match_only: true,
        ..ScanOptions::default()
    };
    let hits = find_occurrences_with(["new", "new york", "york"], "new york", options);
    let got: Vec<(usize, Vec<&str>)> = hits.iter().map(|o| (o.position, keys(o))).collect();
    assert_eq!(got, vec![(0, vec!["new york"]), (4, vec!["york"])]);
}

#[test]
fn index_is_reusable_across_scans() {
    let index = DictionaryIndex::new(vec![
        DictionaryEntry::new("über", "de"),
        DictionaryEntry::new("Brücke", "de"),
    ]);

    let first = index.scan("über die Brücke");
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].position, 9);
    assert_eq!(first[1].entries[0].key, "Brücke");

    let second = index.scan("Brücken");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].position, 0);
}

#[test]
fn occurrence_serializes_with_entries() {
    let mut entry = DictionaryEntry::new("cat", "en").with_translation("Katze");
    entry.id = "d1".into();
    let hits = find_occurrences([entry], "cat");

    assert_eq!(
        serde_json::to_value(&hits).unwrap(),
        json!([{
            "position": 0,
            "entries": [{
                "id": "d1",
                "key": "cat",
                "lang": "en",
                "translations": ["Katze"],
                "tags": [],
                "variations": []
            }]
        }])
    );
}

#[test]
fn word_fragments_span_the_key() {
    let cat = DictionaryEntry::new("cat", "en");
    let hits = find_occurrences([cat.clone()], "a cat");
    let words = word_fragments(&hits);

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].range, Range::new(2, 5));
    assert_eq!(words[0].kind, FragmentKind::Word { dict_id: cat.id });

    // Plain string keys carry no dictionary id and cannot be linked.
    assert!(word_fragments(&find_occurrences(["cat"], "a cat")).is_empty());
}

#[test]
fn link_words_keeps_short_words_inside_long_ones() {
    let dictionary = vec![
        DictionaryEntry::new("日本", "ja"),
        DictionaryEntry::new("日本語", "ja"),
        DictionaryEntry::new("語", "ja"),
    ];
    let mut text = Fragmentable::new("日本語を話す");
    let index = DictionaryIndex::new(dictionary);
    let hits = index.scan(text.root());

    assert_eq!(link_words(&mut text, &hits).unwrap(), 3);

    let words: Vec<&str> = text
        .fragments()
        .iter()
        .filter_map(|f| text.resolve(f))
        .collect();
    assert_eq!(words, vec!["日本語", "日本", "語"]);
}

#[test]
fn linked_words_under_a_sentence_are_found_by_range() {
    let mut text = Fragmentable::new("the cat sat");
    text.push_fragment(Fragment::sentence(Range::new(0, 11), SentenceFragment::new("猫が座った")))
        .unwrap();

    let index = DictionaryIndex::new(vec![DictionaryEntry::new("cat", "en")]);
    let hits = index.scan(text.root());
    link_words(&mut text, &hits).unwrap();

    let selection = text.fragments_in_range(Range::new(5, 6));
    let types: Vec<FragmentType> = selection
        .iter()
        .map(|s| s.fragment.kind.fragment_type())
        .collect();
    assert_eq!(types, vec![FragmentType::Sentence, FragmentType::Word]);
}

#[test]
fn link_words_skips_partly_overlapping_words() {
    let ab = DictionaryEntry::new("ab", "en");
    let bc = DictionaryEntry::new("bc", "en");
    let mut text = Fragmentable::new("abc");
    let index = DictionaryIndex::new(vec![ab.clone(), bc]);
    let hits = index.scan(text.root());

    assert_eq!(link_words(&mut text, &hits).unwrap(), 1);
    assert_eq!(text.fragments().len(), 1);
    let word = &text.fragments()[0];
    assert_eq!(word.kind, FragmentKind::Word { dict_id: ab.id });
    assert_eq!(text.resolve(word), Some("ab"));
}

#[test]
fn linked_words_always_cover_their_key() {
    let mut text = Fragmentable::new("the cat sat");
    text.push_fragment(Fragment::mark(Range::new(0, 5), "yellow", None))
        .unwrap();

    let index = DictionaryIndex::new(vec![
        DictionaryEntry::new("cat", "en"),
        DictionaryEntry::new("at", "en"),
    ]);
    let hits = index.scan(text.root());
    assert_eq!(link_words(&mut text, &hits).unwrap(), 3);

    let words: Vec<&str> = text
        .fragments()
        .iter()
        .filter(|f| f.kind.fragment_type() == FragmentType::Word)
        .filter_map(|f| text.resolve(f))
        .collect();
    assert_eq!(words, vec!["cat", "at", "at"]);

    // Linking the same scan again adds nothing.
    assert_eq!(link_words(&mut text, &hits).unwrap(), 0);
    assert_eq!(text.fragments().len(), 4);
}

#[test]
fn dictionary_sentence_links_entries() {
    let cat = DictionaryEntry::new("猫", "ja");
    let like = DictionaryEntry::new("好き", "ja");
    let index = DictionaryIndex::new(vec![cat.clone(), like.clone()]);

    let source = DocumentLink::new(Id::from("doc"), Id::from("para"), 0);
    let mut sentence =
        DictionarySentence::new("私は猫が好きです", "I like cats", "ja").with_source(source);
    assert_eq!(sentence.link_entries(&index).unwrap(), 2);
    // Longer words are linked first.
    assert_eq!(sentence.word_ids(), vec![&like.id, &cat.id]);

    let mut links = SentenceLinks::new();
    assert_eq!(links.link_sentence(&sentence), 2);
    assert_eq!(links.link_sentence(&sentence), 0);
    assert_eq!(links.sentences_for(&cat.id), vec![&sentence.id]);
    assert_eq!(links.words_for(&sentence.id), vec![&like.id, &cat.id]);

    let other = DictionarySentence::new("猫がいる", "there is a cat", "ja");
    let hits = index.scan(other.text());
    assert_eq!(links.link_fragments(&other.id, &word_fragments(&hits)), 1);
    assert_eq!(links.sentences_for(&cat.id), vec![&sentence.id, &other.id]);

    let v = serde_json::to_value(&sentence).unwrap();
    assert_eq!(v["content"]["root"], "私は猫が好きです");
    assert_eq!(v["source"]["documentId"], "doc");
    let back: DictionarySentence = serde_json::from_value(v).unwrap();
    assert_eq!(back, sentence);
}

proptest! {
    #[test]
    fn scan_agrees_with_brute_force(
        dictionary in prop::collection::btree_set("[ab]{1,3}", 0..8),
        text in "[abc]{0,24}",
    ) {
        let dictionary: Vec<String> = dictionary.into_iter().collect();
        let hits = find_occurrences(dictionary.clone(), &text);

        let mut expected = Vec::new();
        for position in 0..text.len() {
            let mut found: Vec<&String> = dictionary
                .iter()
                .filter(|k| text[position..].starts_with(k.as_str()))
                .collect();
            if !found.is_empty() {
                found.sort_by_key(|k| k.len());
                expected.push((position, found.into_iter().cloned().collect::<Vec<_>>()));
            }
        }

        let got: Vec<(usize, Vec<String>)> =
            hits.into_iter().map(|o| (o.position, o.entries)).collect();
        prop_assert_eq!(got, expected);
    }
}
