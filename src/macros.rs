/// Macro to create a LifeData from age and per-gender expectancy vectors.
/// Usage:
/// ```rust
/// # use momento_mori::prelude::*;
/// let data = ledf! {
///     "age" => [0_u32, 1, 2],
///     "male life expectancy" => [76.0_f64, 75.4, 74.4],
///     "female life expectancy" => [81.0_f64, 80.4, 79.4],
/// }?;
/// # MomentoResult::Ok(())
/// ```
#[macro_export]
macro_rules! ledf {
    ($($name:expr => $val:expr),+ $(,)?) => {{
        use $crate::life_table::life_data::LifeData;
        use polars::prelude::df;
        let df_result = df! { $($name => $val),+ };
        match df_result {
            Ok(df) => LifeData::from_df(df),
            Err(e) => Err($crate::error::MomentoError::from(e)),
        }
    }};
}
