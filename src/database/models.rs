use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::domain::{GameResult, MatchVariant, TimeOfDay};

/// Store a unit enum as the TEXT returned by its `as_str`
macro_rules! text_column {
    ($ty:ident) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                let text = value.as_str()?;
                $ty::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == text)
                    .ok_or_else(|| {
                        FromSqlError::Other(
                            format!("unknown {} value '{}'", stringify!($ty), text).into(),
                        )
                    })
            }
        }
    };
}

text_column!(GameResult);
text_column!(TimeOfDay);
text_column!(MatchVariant);
