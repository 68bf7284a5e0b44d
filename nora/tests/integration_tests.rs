use nora::interpret;

#[test]
#[should_panic]
fn smoke_assert() {
    interpret(
        r#"
        assert(false);"#,
    );
}

#[test]
#[should_panic]
fn smoke_assert_eq() {
    interpret(
        r#"
        assert_eq(1, 2);"#,
    );
}

#[test]
fn variables() {
    interpret(
        r#"
        let x = 1;
        assert_eq(x, 1);
        let y = x + 1;
        assert_eq(y, 2);
        assert_eq(y, x + 1);"#,
    );
}

#[test]
fn comments() {
    interpret(
        r#"
        let x = 1; // a comment
        assert_eq(x, 1);"#,
    );
}

#[test]
fn conditionals() {
    interpret(
        r#"
        let max = fn(a, b) { if (a > b) { a } else { b } };
        assert_eq(max(1, 2), 2);
        assert_eq(max(4, 3), 4);
        assert_eq(if (false) { 1 }, if (1 == 2) { 3 });"#,
    );
}

mod functions {
    use super::*;

    #[test]
    fn functions() {
        interpret(
            r#"
            let foo = fn() {
                return 1;
            };
            assert_eq(foo(), 1);"#,
        );
    }

    #[test]
    fn functions_with_params() {
        interpret(
            r#"
            let double = fn(x) {
                let result = x * 2;
                return result;
            };
            assert_eq(double(10), 20);
            assert_eq(double(-2), -4);"#,
        );
    }

    #[test]
    fn functions_implicit_return() {
        interpret(
            r#"
            let foo = fn() { 42 };
            assert_eq(foo(), 42);"#,
        );
    }

    #[test]
    fn higher_order_function() {
        interpret(
            r#"
            let twice = fn(f, v) {
                return f(f(v));
            };
            let double = fn(x) {
                return x * 2;
            };

            assert_eq(twice(double, 10), 40);
            assert_eq(twice(double, -2), -8);"#,
        );
    }

    #[test]
    fn closures() {
        interpret(
            r#"
            let createAdder = fn(x) {
                fn(y) {
                    return x + y;
                }
            };
            let addTwo = createAdder(2);
            assert_eq(addTwo(1), 3);"#,
        );
        interpret(
            r#"
            let compose = fn(f, g) {
                fn(x) {
                    return f(g(x));
                }
            };
            let addOne = fn(x) { return x + 1; };
            let addTwo = fn(x) { return x + 2; };
            assert_eq(compose(addOne, addTwo)(2), 5);"#,
        );
    }

    #[test]
    fn recursion() {
        interpret(
            r#"
            let fact = fn(n) {
                if (n < 2) { 1 } else { n * fact(n - 1) }
            };
            assert_eq(fact(5), 120);"#,
        );
    }
}

mod builtins {
    use super::*;

    #[test]
    fn len() {
        interpret(
            r#"
            assert_eq(len("hello"), 5);
            assert_eq(len(""), 0);
            assert_eq(len("hello" + " " + "world"), 11);"#,
        );
    }

    #[test]
    #[should_panic]
    fn len_rejects_non_strings() {
        interpret(
            r#"
            len(5);"#,
        );
    }
}
