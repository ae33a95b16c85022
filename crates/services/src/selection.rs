use interview_core::model::{CategoryName, CategoryPool, QuestionBlock};
use rand::Rng;

/// A question chosen for display, with the coordinates needed to answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPick {
    pub category: CategoryName,
    pub index: usize,
    pub block: QuestionBlock,
}

/// Pick a category uniformly among the listed ones that still have questions,
/// then a block uniformly within it.
///
/// Nothing is removed; the same block can come up again until it is answered.
/// Returns `None` when no listed category has a question left.
pub fn pick_question<R: Rng + ?Sized>(
    pool: &CategoryPool,
    categories: &[CategoryName],
    rng: &mut R,
) -> Option<QuestionPick> {
    let candidates: Vec<&CategoryName> = categories
        .iter()
        .filter(|name| pool.len_of(name) > 0)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let category = candidates[rng.random_range(0..candidates.len())];
    let blocks = pool.get(category)?;
    let index = rng.random_range(0..blocks.len());

    Some(QuestionPick {
        category: category.clone(),
        index,
        block: blocks[index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn name(value: &str) -> CategoryName {
        CategoryName::new(value).unwrap()
    }

    fn blocks(prefix: &str, count: usize) -> Vec<QuestionBlock> {
        (0..count)
            .map(|i| QuestionBlock::new(format!("{prefix}{i}"), ["a"]).unwrap())
            .collect()
    }

    #[test]
    fn picks_stay_within_listed_categories_and_bounds() {
        let mut pool = CategoryPool::new();
        pool.insert(name("JS"), blocks("js", 3));
        pool.insert(name("CSS"), blocks("css", 1));
        pool.insert(name("Unlisted"), blocks("x", 5));
        let list = vec![name("JS"), name("CSS")];

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pick = pick_question(&pool, &list, &mut rng).unwrap();
            assert!(list.contains(&pick.category));
            assert!(pick.index < pool.len_of(&pick.category));
            assert_eq!(pool.get(&pick.category).unwrap()[pick.index], pick.block);
        }
    }

    #[test]
    fn skips_exhausted_categories() {
        let mut pool = CategoryPool::new();
        pool.insert(name("JS"), Vec::new());
        pool.insert(name("CSS"), blocks("css", 2));
        let list = vec![name("JS"), name("CSS")];

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let pick = pick_question(&pool, &list, &mut rng).unwrap();
            assert_eq!(pick.category, name("CSS"));
        }
    }

    #[test]
    fn every_category_eventually_comes_up() {
        let mut pool = CategoryPool::new();
        pool.insert(name("A"), blocks("a", 1));
        pool.insert(name("B"), blocks("b", 1));
        let list = vec![name("A"), name("B")];

        let mut rng = StdRng::seed_from_u64(42);
        let picked: Vec<_> = (0..64)
            .map(|_| pick_question(&pool, &list, &mut rng).unwrap().category)
            .collect();
        assert!(picked.contains(&name("A")));
        assert!(picked.contains(&name("B")));
    }

    #[test]
    fn nothing_to_pick() {
        let pool = CategoryPool::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_question(&pool, &[], &mut rng).is_none());
        assert!(pick_question(&pool, &[name("JS")], &mut rng).is_none());
    }
}
