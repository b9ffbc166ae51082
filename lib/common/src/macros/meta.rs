/// Repeat an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` once per type
/// in `$T`, with the current type visible inside `$imp` as `$Alias`.
///
/// Mostly for implementing a trait on both `f32` and `f64` without a copy/paste. Prefer generics
/// where they work.
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($T:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous scope, so the aliases don't collide
                type $Alias = $T;
                $imp
            };
        )+
    };
}
