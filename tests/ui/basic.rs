use static_variant::{static_variant, StaticVariant};

#[static_variant]
#[derive(Debug, Clone)]
enum Operation {
    Amount(u64),
    Memo(String),
}

fn main() {
    let mut op = Operation::from(12u64);
    assert_eq!(op.which(), 0);
    assert_eq!(*op.get::<u64>().unwrap(), 12);
    op.set_which(1).unwrap();
    assert_eq!(op.get::<String>().unwrap(), "");
}
