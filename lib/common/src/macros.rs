/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each
/// type `$Ty`, making it available within `$imp` under the alias `$Alias`.
///
/// Mostly used to implement [Float](crate::Float) for both `f32` and `f64` from one body.
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Ty:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $Alias = $Ty;
                $imp
            };
        )+
    };
}
