use arena_rbtree::RbTree;

fn main() {
    let mut tree: RbTree<u32> = RbTree::new();

    for value in [4, 42, 5, 7, 32, 9, 46, 49] {
        tree.insert(value);
        tree.assert_invariants();
        println!("{:?}", tree.iter().copied().collect::<Vec<_>>());
    }

    println!("count:    {}", tree.len());
    println!("minimum:  {:?}", tree.first());
    println!("maximum:  {:?}", tree.last());
    println!("find 32:  {:?}", tree.get(&32));
    println!("find 99:  {:?}", tree.get(&99));

    println!("preorder:  {:?}", tree.preorder().copied().collect::<Vec<_>>());
    println!("postorder: {:?}", tree.postorder().copied().collect::<Vec<_>>());

    let mut dot = String::new();
    tree.dotgraph("demo", &mut dot).unwrap();
    println!("{dot}");
}
