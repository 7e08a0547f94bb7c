use super::{ExpectancyRow, Gender};
use crate::MomentoResult;
use crate::error::MomentoError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub const AGE_COLUMN: &str = "age";

#[derive(Debug, Clone)]
pub struct LifeData {
    pub description: String,
    pub dataframe: DataFrame,
}

impl LifeData {
    /// Create a new LifeData instance from a DataFrame.
    ///
    /// This is the primary constructor. It validates the DataFrame schema, keeps only the
    /// required columns and casts them to their working types.
    ///
    /// # Schema Requirements
    /// - Column "age": whole numbers, exactly `0, 1, 2, ...` in row order
    /// - Columns "male life expectancy" and "female life expectancy": numbers ≥ 0
    /// - Any other column is dropped
    /// - At least one row
    ///
    /// # Errors
    /// - Empty DataFrame
    /// - Missing column
    /// - Cell that is empty or cannot be read as a number
    /// - Negative, NaN or infinite value
    /// - Fractional age
    /// - Ages not contiguous from 0
    pub fn new(description: String, dataframe: DataFrame) -> MomentoResult<Self> {
        // Validate DataFrame schema first
        validate_df_schema(&dataframe)?;
        validate_whole_ages(&dataframe)?;

        // Narrow to the required columns with working types
        let dataframe = setup_dataframe_to_correct_schema(dataframe).map_err(|e| {
            MomentoError::DataLoad(format!("non-numeric cells could not be converted: {e}"))
        })?;

        // Casting turns unreadable cells into nulls, so values are checked afterwards
        validate_df_values(&dataframe)?;

        Ok(Self {
            description,
            dataframe,
        })
    }

    /// Wrap an in-memory DataFrame.
    ///
    /// # Examples
    /// ```rust
    /// # use momento_mori::prelude::*;
    /// use polars::prelude::*;
    /// let df = df! {
    ///     "age" => [0_u32, 1],
    ///     "male life expectancy" => [76.0_f64, 75.4],
    ///     "female life expectancy" => [81.0_f64, 80.4],
    /// }?;
    /// let data = LifeData::from_df(df)?;
    /// assert_eq!(data.dataframe.height(), 2);
    /// # MomentoResult::Ok(())
    /// ```
    pub fn from_df(df: DataFrame) -> MomentoResult<Self> {
        let description = "Created from DataFrame".to_string();
        Self::new(description, df)
    }

    /// Read the table from a CSV file with a header row.
    ///
    /// # Errors
    /// - File not found
    /// - Invalid CSV
    /// - Schema validation errors (see [`LifeData::new`])
    pub fn from_csv(path: impl AsRef<Path>) -> MomentoResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(MomentoError::DataLoad(format!(
                "life expectancy data file not found: '{}'",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| {
                MomentoError::DataLoad(format!("failed to read CSV '{}': {e}", path.display()))
            })?;
        debug!(path = %path.display(), shape = ?df.shape(), "csv parsed");

        let data = Self::new(format!("Loaded from CSV file '{}'", path.display()), df)?;
        info!(
            path = %path.display(),
            rows = data.dataframe.height(),
            "life expectancy data loaded"
        );
        Ok(data)
    }

    /// Extract the frozen per-age rows, index = age.
    pub fn rows(&self) -> MomentoResult<Vec<ExpectancyRow>> {
        let male = self.dataframe.column(Gender::Male.column_name())?.f64()?;
        let female = self.dataframe.column(Gender::Female.column_name())?.f64()?;

        male.into_iter()
            .zip(female)
            .enumerate()
            .map(|(age, pair)| match pair {
                (Some(male), Some(female)) => Ok(ExpectancyRow { male, female }),
                _ => Err(MomentoError::DataLoad(format!(
                    "missing life expectancy value at age {age}"
                ))),
            })
            .collect()
    }
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn required_columns() -> [&'static str; 3] {
    [
        AGE_COLUMN,
        Gender::Male.column_name(),
        Gender::Female.column_name(),
    ]
}

fn validate_df_schema(df: &DataFrame) -> MomentoResult<()> {
    if df.height() == 0 {
        return Err(MomentoError::DataLoad(
            "DataFrame must contain at least one row of data".into(),
        ));
    }

    let col_names = df.get_column_names();
    for required in required_columns() {
        if !col_names.iter().any(|name| name.as_str() == required) {
            return Err(MomentoError::DataLoad(format!(
                "missing required column '{required}'"
            )));
        }
    }

    Ok(())
}

// Casting a float age to u32 truncates, so 1.5 would pass as 1
fn validate_whole_ages(df: &DataFrame) -> MomentoResult<()> {
    let ages = df.column(AGE_COLUMN)?;
    if !ages.dtype().is_float() {
        return Ok(());
    }

    let ages = ages.cast(&DataType::Float64)?;
    if let Some((row, age)) = ages
        .f64()?
        .into_iter()
        .enumerate()
        .find_map(|(row, age)| age.filter(|a| a.fract() != 0.0).map(|a| (row, a)))
    {
        return Err(MomentoError::DataLoad(format!(
            "ages must be whole numbers, found {age} at row {row}"
        )));
    }

    Ok(())
}

fn setup_dataframe_to_correct_schema(df: DataFrame) -> PolarsResult<DataFrame> {
    // This function assumes DataFrame has already been validated
    df.lazy()
        .select([
            col(AGE_COLUMN).cast(DataType::UInt32),
            col(Gender::Male.column_name()).cast(DataType::Float64),
            col(Gender::Female.column_name()).cast(DataType::Float64),
        ])
        .collect()
}

fn validate_df_values(df: &DataFrame) -> MomentoResult<()> {
    for column in df.get_columns() {
        let col_name = column.name();
        if column.null_count() > 0 {
            return Err(MomentoError::DataLoad(format!(
                "column '{col_name}' contains empty or non-numeric cells"
            )));
        }
    }

    for gender in [Gender::Male, Gender::Female] {
        let col_name = gender.column_name();
        // NaN fails every comparison, so test for the accepted range instead
        if let Some((row, value)) = df
            .column(col_name)?
            .f64()?
            .into_no_null_iter()
            .enumerate()
            .find(|&(_, value)| !(value.is_finite() && value >= 0.0))
        {
            return Err(MomentoError::DataLoad(format!(
                "column '{col_name}' must be finite and non-negative, found {value} at row {row}"
            )));
        }
    }

    // Row i must be age i
    let ages = df.column(AGE_COLUMN)?.u32()?;
    if let Some((row, age)) = ages
        .into_no_null_iter()
        .enumerate()
        .find(|&(row, age)| usize::try_from(age).map_or(true, |age| age != row))
    {
        return Err(MomentoError::DataLoad(format!(
            "ages must be contiguous from 0, found age {age} at row {row}"
        )));
    }

    Ok(())
}
