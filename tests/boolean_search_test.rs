use calluna::{Article, CallunaError, Engine, IndexBuilder, MatchSet, Result};

fn article(title: &str, text: &str) -> Article {
    Article {
        title: title.to_string(),
        text: text.to_string(),
    }
}

/// apple ∈ {0, 3}, banana ∈ {1}, cherry ∈ {1, 2, 3}, durian ∈ {2}
fn fruit_engine() -> Engine {
    Engine::from_articles(vec![
        article("Doc0", "apple"),
        article("Doc1", "banana cherry"),
        article("Doc2", "cherry durian"),
        article("Doc3", "apple cherry"),
    ])
}

#[test]
fn test_conjunction_disjunction_negation() -> Result<()> {
    let engine = fruit_engine();

    // 1. AND is set intersection: apple ∩ cherry = {3}
    assert_eq!(
        engine.search("apple AND cherry")?.matches,
        MatchSet::Docs(vec![3])
    );

    // 2. OR is set union: banana ∪ durian = {1, 2}
    assert_eq!(
        engine.search("banana OR durian")?.matches,
        MatchSet::Docs(vec![1, 2])
    );

    // 3. NOT is complement against the universe: ¬cherry = {0}
    assert_eq!(engine.search("NOT cherry")?.matches, MatchSet::Docs(vec![0]));

    // 4. Lowercase operator spellings behave identically.
    assert_eq!(
        engine.search("apple and cherry")?.matches,
        MatchSet::Docs(vec![3])
    );
    Ok(())
}

#[test]
fn test_parenthesized_grouping_differs_from_flat_evaluation() -> Result<()> {
    let engine = fruit_engine();

    // (apple OR banana) AND NOT cherry = {0, 1, 3} ∩ {0} = {0}
    let grouped = engine.search("( apple OR banana ) AND NOT cherry")?;
    assert_eq!(grouped.matches, MatchSet::Docs(vec![0]));

    // apple OR (banana AND NOT cherry) = {0, 3} ∪ ({1} ∩ {0}) = {0, 3}
    let flat = engine.search("apple OR ( banana AND NOT cherry )")?;
    assert_eq!(flat.matches, MatchSet::Docs(vec![0, 3]));

    assert_ne!(grouped.matches, flat.matches);
    Ok(())
}

#[test]
fn test_unknown_term_elision_policy() -> Result<()> {
    let engine = fruit_engine();

    // 1. A lone unknown term matches nothing.
    let outcome = engine.search("zzzznotaword")?;
    assert_eq!(outcome.matches, MatchSet::NoMatch);
    assert!(outcome.matches.is_empty());

    // 2. Negating an unknown term matches every article.
    let outcome = engine.search("NOT zzzznotaword")?;
    assert_eq!(outcome.matches, MatchSet::MatchAll(vec![0, 1, 2, 3]));

    // 3. AND with an unknown operand can never match.
    let outcome = engine.search("apple AND zzzznotaword")?;
    assert_eq!(outcome.matches, MatchSet::NoMatch);

    // 4. OR with an unknown operand evaluates to the known side alone.
    let outcome = engine.search("apple OR zzzznotaword")?;
    assert_eq!(outcome.matches.doc_ids(), engine.index().docs_for_term("apple"));
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("zzzznotaword"));

    // 5. An excised NOT-unknown clause leaves the rest of the query intact.
    let outcome = engine.search("banana OR NOT zzzznotaword")?;
    assert_eq!(outcome.matches, MatchSet::Docs(vec![1]));
    Ok(())
}

#[test]
fn test_malformed_queries_fail_softly() {
    let engine = fruit_engine();

    // Operator with no left operand.
    assert!(matches!(
        engine.search("AND apple"),
        Err(CallunaError::Syntax(_))
    ));
    // Unbalanced parentheses.
    assert!(matches!(
        engine.search("( apple"),
        Err(CallunaError::Syntax(_))
    ));
    assert!(matches!(
        engine.search("apple )"),
        Err(CallunaError::Syntax(_))
    ));
    // Two unknown terms are outside the elision policy.
    assert!(matches!(
        engine.search("zzz OR yyy"),
        Err(CallunaError::Syntax(_))
    ));

    // The engine stays usable after every failure.
    assert_eq!(
        engine.search("apple").unwrap().matches,
        MatchSet::Docs(vec![0, 3])
    );
}

#[test]
fn test_reindexing_same_corpus_is_idempotent() {
    let docs = [
        "the quick brown fox",
        "jumps over the lazy dog",
        "the dog barks",
    ];
    let first = IndexBuilder::new().build(&docs);
    let second = IndexBuilder::new().build(&docs);

    assert_eq!(first.doc_count(), second.doc_count());
    assert_eq!(first.term_count(), second.term_count());
    for term in ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "barks"] {
        assert_eq!(first.docs_for_term(term), second.docs_for_term(term));
    }
}

#[test]
fn test_concurrent_searches_share_the_index() -> Result<()> {
    let engine = fruit_engine();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.search("apple AND cherry")))
            .collect();
        for handle in handles {
            let outcome = handle.join().expect("search thread panicked")?;
            assert_eq!(outcome.matches, MatchSet::Docs(vec![3]));
        }
        Ok(())
    })
}
