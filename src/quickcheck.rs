use ::quickcheck::{Arbitrary, Gen};
use super::Tree;

impl<T> Arbitrary for Tree<T> where T: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Self { Tree::build(Vec::<T>::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let keys: Vec<T> = self.iter().cloned().collect();
        Box::new(keys.shrink().map(Tree::build))
    }
}
