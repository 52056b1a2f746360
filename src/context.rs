use strum_macros::{Display, EnumCount, EnumIter};

/// Disambiguating identifiers for messages whose translation depends on
/// grammatical role rather than surface text alone.
///
/// In languages with case and gender, "the jackal" inflects differently as
/// the attacker of a melee message than as its victim, and an attack verb
/// conjugates against its subject. Each context pairs with a canonical
/// source-language format string; translators key their entries to that
/// exact string, so a catalog can give the same source text a different
/// rendering per role.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumCount, EnumIter)]
pub enum MsgContext {
    Empty,

    MonsterMeleeAttacker,
    MonsterMeleeAttackVerb,
    MonsterMeleeDefender,
    MonsterAttackDesc,

    PlayerAttackVerb,
    PlayerMeleeDefender,
    PlayerAttackDegree,

    PlayerConfKillVictim,
    PlayerConfKillType,

    PlayerKillType,
    PlayerKillVictim,

    OrbActAttacker,
    OrbActDefender,
}

impl MsgContext {
    /// The canonical format string for this context. It doubles as the
    /// catalog msgctxt, so changing one of these strings invalidates the
    /// matching entries in every shipped catalog.
    pub fn canonical(self) -> &'static str {
        match self {
            MsgContext::Empty => "",

            MsgContext::MonsterMeleeAttacker => "%s bites you for 10 damage with +3 dagger!!!",
            MsgContext::MonsterMeleeAttackVerb => "The jackal %s you for 10 damage with +3 dagger!!!",
            MsgContext::MonsterMeleeDefender => "The jackal bites %s for 10 damage with +3 dagger!!!",
            MsgContext::MonsterAttackDesc => "The jackal bites you for 10 damage%s!!!",

            MsgContext::PlayerAttackVerb => "You %s the jackal like an onion for 10 damage!!!!!",
            MsgContext::PlayerMeleeDefender => "You slice %s like an onion for 10 damage!!!!!",
            MsgContext::PlayerAttackDegree => "You slice the jackal%s for 10 damage!!!!!",

            MsgContext::PlayerConfKillVictim => "%s is %(blown up)s!",
            MsgContext::PlayerConfKillType => "The jackal is %s!",

            MsgContext::PlayerKillType => "You %s %(a jackal)s!",
            MsgContext::PlayerKillVictim => "You kill %(a jackal)s!",

            MsgContext::OrbActAttacker => "%s hits a closed door.",
            MsgContext::OrbActDefender => "The orb of death hits %s.",
        }
    }
}
