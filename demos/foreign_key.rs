//! Extracts the pieces of a MySQL foreign-key constraint clause, as found
//! in `SHOW CREATE TABLE` output.
//!
//! Run with: `cargo run --example foreign_key`

use anyhow::Result;
use charcomb::{
    BoxedExt, CharCursor, MapExt, Parser, between, choice, item, many, not_followed_by, or,
    quoted_string, separated_by, sequence, succeed, symbol, token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReferenceAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ForeignKeyClause {
    constraint: Option<String>,
    index_name: Option<String>,
    columns: Vec<String>,
    referenced_table: String,
    referenced_columns: Vec<String>,
    on_delete: Option<ReferenceAction>,
    on_update: Option<ReferenceAction>,
}

#[derive(Debug, Clone, Copy)]
enum ActionClause {
    OnDelete(ReferenceAction),
    OnUpdate(ReferenceAction),
}

/// A backtick-quoted name with surrounding whitespace consumed
fn quoted_name<'text>() -> impl Parser<'text, Output = String> {
    token(quoted_string('`'))
}

fn reference_action<'text>() -> impl Parser<'text, Output = ReferenceAction> {
    choice(vec![
        symbol("RESTRICT").map(|_| ReferenceAction::Restrict).boxed(),
        symbol("CASCADE").map(|_| ReferenceAction::Cascade).boxed(),
        symbol("SET NULL").map(|_| ReferenceAction::SetNull).boxed(),
        symbol("NO ACTION").map(|_| ReferenceAction::NoAction).boxed(),
        symbol("SET DEFAULT")
            .map(|_| ReferenceAction::SetDefault)
            .boxed(),
    ])
}

fn action_clause<'text>() -> impl Parser<'text, Output = ActionClause> {
    sequence(
        |(event, action): (String, ReferenceAction)| match event.as_str() {
            "ON DELETE" => ActionClause::OnDelete(action),
            _ => ActionClause::OnUpdate(action),
        },
        (
            or(symbol("ON DELETE"), symbol("ON UPDATE")),
            reference_action(),
        ),
    )
}

/// ON DELETE / ON UPDATE clauses in any order, both optional
fn action_clauses<'text>()
-> impl Parser<'text, Output = (Option<ReferenceAction>, Option<ReferenceAction>)> {
    many(action_clause()).map(|clauses| {
        let mut on_delete = None;
        let mut on_update = None;
        for clause in clauses {
            match clause {
                ActionClause::OnDelete(action) => on_delete = Some(action),
                ActionClause::OnUpdate(action) => on_update = Some(action),
            }
        }
        (on_delete, on_update)
    })
}

/// Parenthesized, comma-separated list of quoted names
fn name_list<'text>() -> impl Parser<'text, Output = Vec<String>> {
    between(
        symbol("("),
        separated_by(quoted_name(), symbol(",")),
        symbol(")"),
    )
}

/// Optional `CONSTRAINT <name>` prefix
fn constraint_prefix<'text>() -> impl Parser<'text, Output = Option<String>> {
    or(
        sequence(
            |(_, name): (String, String)| Some(name),
            (symbol("CONSTRAINT"), quoted_name()),
        ),
        succeed(None),
    )
}

fn foreign_key_clause<'text>() -> impl Parser<'text, Output = ForeignKeyClause> {
    sequence(
        |(constraint, _, index_name, columns, _, referenced_table, referenced_columns, actions)| {
            let (on_delete, on_update) = actions;
            ForeignKeyClause {
                constraint,
                index_name,
                columns,
                referenced_table,
                referenced_columns,
                on_delete,
                on_update,
            }
        },
        (
            constraint_prefix(),
            symbol("FOREIGN KEY"),
            or(quoted_name().map(Some), succeed(None)),
            name_list(),
            symbol("REFERENCES"),
            quoted_name(),
            name_list(),
            action_clauses(),
        ),
    )
}

/// The clause followed by end of input
fn full_clause<'text>() -> impl Parser<'text, Output = ForeignKeyClause> {
    sequence(
        |(clause, _)| clause,
        (foreign_key_clause(), not_followed_by(item())),
    )
}

fn main() -> Result<()> {
    let clause = "CONSTRAINT `table_key_name` FOREIGN KEY (`fk_colum_1`) \
                  REFERENCES `ref_table_name` (`ref_key_1`,`ref_key_2`,`ref_key_3`) \
                  ON UPDATE NO ACTION ON DELETE NO ACTION";

    let cursor = CharCursor::new(clause);
    let (parsed, _) = full_clause().parse(cursor)?;

    println!("constraint:         {:?}", parsed.constraint);
    println!("index name:         {:?}", parsed.index_name);
    println!("columns:            {:?}", parsed.columns);
    println!("referenced table:   {}", parsed.referenced_table);
    println!("referenced columns: {:?}", parsed.referenced_columns);
    println!("on delete:          {:?}", parsed.on_delete);
    println!("on update:          {:?}", parsed.on_update);

    Ok(())
}
