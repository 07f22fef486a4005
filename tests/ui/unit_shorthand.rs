use static_variant::{static_variant, StaticVariant};

#[derive(Debug, Clone, Default)]
struct Ping;

#[derive(Debug, Clone, Default)]
struct Pong;

#[static_variant(no_tree)]
#[derive(Debug, Clone)]
enum Message {
    Ping,
    Pong,
}

fn main() {
    let message = Message::default();
    assert_eq!(message.which(), 0);
    assert_eq!(Message::type_names(), ["Ping", "Pong"]);

    let message = Message::from(Pong);
    assert_eq!(message.which(), 1);
}
