use typebound::prelude::*;

fn main() {
    let window = OpenInterval::new(0.0_f64, 1.0);
    assert!(window.test(&0.5));
    assert!(!window.test(&1.0));

    let name = Constrained::<String, _>::new("m".to_owned(), LessEqual::new("n".to_owned()));
    assert!(name.is_ok());
}
