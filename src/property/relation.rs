//! The relation property: the parenthesized role-player list of a relation
//! pattern, e.g. `(wife: $x, husband: $y)` or `($x, $y)`.
//!
//! Player order is part of the node's identity. It drives both printing and
//! equality, so `($x, $y)` and `($y, $x)` are different properties.

use std::fmt::Display;
use std::iter;

use crate::ast::kind::StatementKind;
use crate::ast::statement::Statement;
use crate::diagnostics::GraqlError;
use crate::lexer::token::{Char, TypeKeyword};
use crate::property::{Statements, VarProperty};

/// A player in a relation, optionally tagged with the role it plays
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RolePlayer {
    role: Option<Statement>,
    player: Statement,
}

impl RolePlayer {
    pub fn new(role: Option<Statement>, player: Statement) -> Self {
        Self { role, player }
    }

    /// Build from parts that may be missing, as assembled by builder code.
    ///
    /// Fails with `InvalidArgument` when there is no player.
    pub fn try_new(role: Option<Statement>, player: Option<Statement>) -> Result<Self, GraqlError> {
        let player = player.ok_or(GraqlError::InvalidArgument { argument: "player" })?;
        Ok(Self::new(role, player))
    }

    /// The role, if specified
    pub fn role(&self) -> Option<&Statement> {
        self.role.as_ref()
    }

    pub fn player(&self) -> &Statement {
        &self.player
    }
}

impl Display for RolePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(role) = &self.role {
            write!(f, "{}{}", role.printable_name(), Char::ColonSpace)?;
        }
        write!(f, "{}", self.player.printable_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationProperty {
    players: Vec<RolePlayer>,
}

impl RelationProperty {
    /// An empty player list is accepted here; the grammar is what requires
    /// at least one player.
    pub fn new(players: Vec<RolePlayer>) -> Self {
        Self { players }
    }

    /// Fails with `InvalidArgument` when no player list is given at all.
    pub fn try_new(players: Option<Vec<RolePlayer>>) -> Result<Self, GraqlError> {
        let players = players.ok_or(GraqlError::InvalidArgument { argument: "players" })?;
        Ok(Self::new(players))
    }

    pub fn players(&self) -> &[RolePlayer] {
        &self.players
    }

    /// A copy of this relation with `player` appended
    pub fn with_player(&self, player: RolePlayer) -> Self {
        let mut players = self.players.clone();
        players.push(player);
        Self { players }
    }

    /// Roles named in this relation, in player order
    pub fn role_statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.players.iter().filter_map(RolePlayer::role)
    }

    /// For each player in order: the player, then its role if present
    pub fn referenced_statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.players
            .iter()
            .flat_map(|rp| iter::once(rp.player()).chain(rp.role()))
    }
}

impl VarProperty for RelationProperty {
    fn keyword(&self) -> &'static str {
        TypeKeyword::Relation.as_str()
    }

    fn property(&self) -> String {
        self.to_string()
    }

    fn is_unique(&self) -> bool {
        true
    }

    fn statements(&self) -> Statements<'_> {
        Box::new(self.referenced_statements())
    }

    fn types(&self) -> Statements<'_> {
        Box::new(self.role_statements())
    }

    fn statement_class(&self) -> StatementKind {
        StatementKind::Relation
    }
}

// Printed without its keyword: the parentheses already identify it
impl Display for RelationProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Char::ParenOpen)?;
        for (i, rp) in self.players.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Char::CommaSpace)?;
            }
            write!(f, "{}", rp)?;
        }
        write!(f, "{}", Char::ParenClose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn role(label: &str, var: &str) -> RolePlayer {
        RolePlayer::new(Some(Statement::label(label)), Statement::var(var))
    }

    fn anon(var: &str) -> RolePlayer {
        RolePlayer::new(None, Statement::var(var))
    }

    #[test]
    fn test_display_with_roles() {
        let rel = RelationProperty::new(vec![role("wife", "x"), role("husband", "y")]);
        assert_eq!(rel.to_string(), "(wife: $x, husband: $y)");
        assert_eq!(rel.property(), "(wife: $x, husband: $y)");
    }

    #[test]
    fn test_display_without_roles() {
        let rel = RelationProperty::new(vec![anon("x"), anon("y")]);
        assert_eq!(rel.to_string(), "($x, $y)");
    }

    #[test]
    fn test_display_is_deterministic() {
        let rel = RelationProperty::new(vec![role("employee", "p"), anon("c")]);
        assert_eq!(rel.to_string(), rel.to_string());
        assert_eq!(rel.to_string(), "(employee: $p, $c)");
    }

    #[test]
    fn test_empty_relation() {
        let rel = RelationProperty::new(Vec::new());
        assert_eq!(rel.to_string(), "()");
        assert!(rel.players().is_empty());
        assert_eq!(rel.referenced_statements().count(), 0);
    }

    #[test]
    fn test_role_variable_printed_as_variable() {
        let rel = RelationProperty::new(vec![RolePlayer::new(
            Some(Statement::var("r")),
            Statement::var("x"),
        )]);
        assert_eq!(rel.to_string(), "($r: $x)");
    }

    #[test]
    fn test_keyword_and_class() {
        let rel = RelationProperty::new(vec![anon("x")]);
        assert_eq!(rel.keyword(), "relation");
        assert!(rel.is_unique());
        assert_eq!(rel.statement_class(), StatementKind::Relation);
    }

    #[test]
    fn test_traversal_order() {
        let r1 = Statement::label("r1");
        let p1 = Statement::var("p1");
        let p2 = Statement::var("p2");
        let rel = RelationProperty::new(vec![
            RolePlayer::new(Some(r1.clone()), p1.clone()),
            RolePlayer::new(None, p2.clone()),
        ]);

        let referenced: Vec<&Statement> = rel.referenced_statements().collect();
        assert_eq!(referenced, vec![&p1, &r1, &p2]);

        let roles: Vec<&Statement> = rel.role_statements().collect();
        assert_eq!(roles, vec![&r1]);

        // restartable, and the trait view agrees
        assert_eq!(rel.referenced_statements().count(), 3);
        assert_eq!(rel.statements().collect::<Vec<_>>(), referenced);
        assert_eq!(rel.types().collect::<Vec<_>>(), roles);
    }

    #[test]
    fn test_order_sensitive_equality() {
        let a = role("wife", "x");
        let b = role("husband", "y");
        let ab = RelationProperty::new(vec![a.clone(), b.clone()]);
        let ba = RelationProperty::new(vec![b, a]);
        assert_ne!(ab, ba);
        assert_ne!(ab.to_string(), ba.to_string());
    }

    #[test]
    fn test_role_player_equality() {
        assert_eq!(anon("x"), anon("x"));
        assert_eq!(role("wife", "x"), role("wife", "x"));
        assert_ne!(role("wife", "x"), anon("x"));
        assert_ne!(role("wife", "x"), role("husband", "x"));
        assert_ne!(anon("x"), anon("y"));
    }

    #[test]
    fn test_hash_consistency() {
        let a = RelationProperty::new(vec![role("wife", "x"), anon("y")]);
        let b = RelationProperty::new(vec![role("wife", "x"), anon("y")]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&anon("x")), hash_of(&anon("x")));
        assert_eq!(hash_of(&role("wife", "x")), hash_of(&role("wife", "x")));

        let set: HashSet<RelationProperty> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_try_new_rejects_missing_player() {
        let err = RolePlayer::try_new(Some(Statement::label("wife")), None).unwrap_err();
        assert_eq!(err, GraqlError::InvalidArgument { argument: "player" });

        let ok = RolePlayer::try_new(None, Some(Statement::var("x"))).unwrap();
        assert_eq!(ok, anon("x"));
    }

    #[test]
    fn test_try_new_rejects_missing_players() {
        let err = RelationProperty::try_new(None).unwrap_err();
        assert_eq!(err, GraqlError::InvalidArgument { argument: "players" });

        let empty = RelationProperty::try_new(Some(Vec::new())).unwrap();
        assert_eq!(empty, RelationProperty::new(Vec::new()));
    }

    #[test]
    fn test_players_copy_does_not_alias() {
        let rel = RelationProperty::new(vec![anon("x")]);
        let before = rel.to_string();

        let mut observed = rel.players().to_vec();
        observed.push(anon("y"));
        observed[0] = role("wife", "z");

        assert_eq!(rel.to_string(), before);
        assert_eq!(rel, RelationProperty::new(vec![anon("x")]));
    }

    #[test]
    fn test_with_player_leaves_original() {
        let rel = RelationProperty::new(vec![anon("x")]);
        let extended = rel.with_player(role("wife", "y"));
        assert_eq!(rel.players().len(), 1);
        assert_eq!(extended.to_string(), "($x, wife: $y)");
    }

    #[test]
    fn test_anonymous_players_compare_equal() {
        let a = RelationProperty::new(vec![RolePlayer::new(None, Statement::anonymous())]);
        let b = RelationProperty::new(vec![RolePlayer::new(None, Statement::var("_"))]);
        let c = RelationProperty::new(vec![RolePlayer::new(None, Statement::anonymous())]);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "($_)");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RolePlayer>();
        assert_send_sync::<RelationProperty>();
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_role_player() -> impl Strategy<Value = RolePlayer> {
            (
                prop::option::of("[a-z][a-z0-9_]{0,6}"),
                "[a-z][a-z0-9_]{0,6}",
            )
                .prop_map(|(role, player)| {
                    RolePlayer::new(role.map(Statement::label), Statement::var(player))
                })
        }

        fn arb_relation() -> impl Strategy<Value = RelationProperty> {
            prop::collection::vec(arb_role_player(), 0..6).prop_map(RelationProperty::new)
        }

        // Few distinct names, so independently drawn relations often collide
        fn arb_statement() -> impl Strategy<Value = Statement> {
            prop_oneof![
                Just(Statement::anonymous()),
                "[ab]".prop_map(Statement::var),
                "[ab]".prop_map(Statement::label),
            ]
        }

        fn arb_small_relation() -> impl Strategy<Value = RelationProperty> {
            prop::collection::vec(
                (prop::option::of(arb_statement()), arb_statement())
                    .prop_map(|(role, player)| RolePlayer::new(role, player)),
                0..3,
            )
            .prop_map(RelationProperty::new)
        }

        proptest! {
            #[test]
            fn prop_equal_implies_same_hash(a in arb_relation(), b in arb_relation()) {
                if a == b {
                    prop_assert_eq!(hash_of(&a), hash_of(&b));
                }
                let copy = a.clone();
                prop_assert_eq!(&copy, &a);
                prop_assert_eq!(hash_of(&copy), hash_of(&a));
            }

            #[test]
            fn prop_equality_matches_display(a in arb_relation(), b in arb_relation()) {
                // roles and players print distinctly, so the text is a faithful key
                prop_assert_eq!(a == b, a.to_string() == b.to_string());
            }

            #[test]
            fn prop_equivalence_laws(
                a in arb_small_relation(),
                b in arb_small_relation(),
                c in arb_small_relation(),
            ) {
                prop_assert_eq!(&a, &a.clone());
                prop_assert_eq!(a == b, b == a);
                if a == b && b == c {
                    prop_assert_eq!(&a, &c);
                    prop_assert_eq!(hash_of(&a), hash_of(&c));
                }
                if a == b {
                    prop_assert_eq!(hash_of(&a), hash_of(&b));
                }
            }

            #[test]
            fn prop_referenced_covers_players_and_roles(rel in arb_relation()) {
                let roles = rel.players().iter().filter(|rp| rp.role().is_some()).count();
                prop_assert_eq!(rel.referenced_statements().count(), rel.players().len() + roles);
                prop_assert_eq!(rel.role_statements().count(), roles);
            }
        }
    }
}
