use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::storage::Storage;

use super::{to_i64, Database};

impl Storage for Database {
    async fn get_string_collection(
        &self,
        namespace: &str,
        key: &str,
        default: Vec<String>,
    ) -> Result<Vec<String>> {
        let namespace = namespace.to_string();
        let key = key.to_string();
        self.execute(move |conn| {
            let known = conn
                .query_row(
                    "SELECT 1 FROM collections WHERE namespace = ?1 AND key = ?2",
                    params![namespace, key],
                    |_| Ok(()),
                )
                .optional()
                .context("failed to look up collection")?;
            if known.is_none() {
                return Ok(default);
            }

            let mut stmt = conn.prepare(
                "SELECT value FROM collection_items
                 WHERE namespace = ?1 AND key = ?2
                 ORDER BY position ASC",
            )?;
            let mut rows = stmt.query(params![namespace, key])?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(row.get::<_, String>(0)?);
            }

            Ok(items)
        })
        .await
    }

    async fn put_string_collection(
        &self,
        namespace: &str,
        key: &str,
        items: &[String],
    ) -> Result<()> {
        let namespace = namespace.to_string();
        let key = key.to_string();
        let items = items.to_vec();
        self.execute(move |conn| {
            let tx = conn
                .transaction()
                .context("failed to open collection transaction")?;

            tx.execute(
                "INSERT INTO collections (namespace, key, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (namespace, key) DO UPDATE SET updated_at = excluded.updated_at",
                params![namespace, key, Utc::now().to_rfc3339()],
            )
            .context("failed to upsert collection")?;

            tx.execute(
                "DELETE FROM collection_items WHERE namespace = ?1 AND key = ?2",
                params![namespace, key],
            )
            .context("failed to clear collection items")?;

            {
                let mut insert = tx.prepare(
                    "INSERT INTO collection_items (namespace, key, position, value)
                     VALUES (?1, ?2, ?3, ?4)",
                )?;
                for (position, value) in items.iter().enumerate() {
                    insert
                        .execute(params![namespace, key, to_i64(position)?, value])
                        .context("failed to insert collection item")?;
                }
            }

            tx.commit().context("failed to commit collection")?;
            Ok(())
        })
        .await
    }
}
