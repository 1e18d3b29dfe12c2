#[cfg(test)]
mod tests {
    use crate::bookmarks::BookmarkStore;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    enum Op {
        Add(u16, Option<u16>),
        Remove(u16),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u16..=10, proptest::option::of(1u16..=20)).prop_map(|(s, v)| Op::Add(s, v)),
            (1u16..=10).prop_map(Op::Remove),
        ]
    }

    proptest! {
        // Any sequence of adds and removes leaves one bookmark per surah,
        // and is_bookmarked agrees with a plain set model
        #[test]
        fn test_bookmarks_match_set_model(ops in proptest::collection::vec(op(), 0..40)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let store = BookmarkStore::in_memory();
            let mut model = HashSet::new();

            runtime.block_on(async {
                for op in &ops {
                    match *op {
                        Op::Add(surah, verse) => {
                            let added = store.add_bookmark(surah, verse).await.unwrap();
                            assert_eq!(added, model.insert(surah));
                        }
                        Op::Remove(surah) => {
                            let removed = store.remove_bookmark(surah).await.unwrap();
                            assert_eq!(removed, model.remove(&surah));
                        }
                    }
                }
            });

            let surahs: Vec<u16> = store.bookmarks().iter().map(|b| b.surah_number).collect();
            let unique: HashSet<u16> = surahs.iter().copied().collect();
            prop_assert_eq!(surahs.len(), unique.len());
            prop_assert_eq!(&unique, &model);
            for surah in 1u16..=10 {
                prop_assert_eq!(store.is_bookmarked(surah), model.contains(&surah));
            }
        }
    }
}
