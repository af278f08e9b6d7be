use super::{parse_args, structured};
use crate::docs::DocsClient;
use crate::docs::options::{
    InsertTableColumnOptions, InsertTableOptions, InsertTableRowOptions, TableCellOptions,
    TableRangeOptions,
};
use crate::error::Result;
use serde_json::{Map, Value};

pub async fn insert_table(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertTableOptions = parse_args(args)?;
    structured(client.insert_table(&options).await?)
}

pub async fn insert_table_row(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertTableRowOptions = parse_args(args)?;
    structured(client.insert_table_row(&options).await?)
}

pub async fn insert_table_column(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: InsertTableColumnOptions = parse_args(args)?;
    structured(client.insert_table_column(&options).await?)
}

pub async fn delete_table_row(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: TableCellOptions = parse_args(args)?;
    structured(client.delete_table_row(&options).await?)
}

pub async fn delete_table_column(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: TableCellOptions = parse_args(args)?;
    structured(client.delete_table_column(&options).await?)
}

pub async fn merge_table_cells(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: TableRangeOptions = parse_args(args)?;
    structured(client.merge_table_cells(&options).await?)
}

pub async fn unmerge_table_cells(client: &DocsClient, args: Map<String, Value>) -> Result<Value> {
    let options: TableRangeOptions = parse_args(args)?;
    structured(client.unmerge_table_cells(&options).await?)
}
