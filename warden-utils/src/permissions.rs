use poise::serenity_prelude as serenity;

/// Convert a permission bitset into a sorted display list.
///
/// If `ADMINISTRATOR` is present, only `ADMINISTRATOR` is returned because
/// it implicitly grants all permissions.
pub fn permission_names(perms: serenity::Permissions) -> Vec<String> {
    if perms.contains(serenity::Permissions::ADMINISTRATOR) {
        return vec!["ADMINISTRATOR".to_owned()];
    }

    let mut names: Vec<String> = perms
        .iter_names()
        .map(|(name, _flag)| name.to_owned())
        .collect();
    names.sort_unstable();
    names
}

/// Flag name(s) for a required permission, e.g. `BAN_MEMBERS`.
pub fn permission_label(required: serenity::Permissions) -> String {
    permission_names(required).join(" | ")
}

/// `ADMINISTRATOR` satisfies every requirement.
pub fn has_permission(perms: serenity::Permissions, required: serenity::Permissions) -> bool {
    perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required)
}

/// Where a member sits in a guild's role hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberRank {
    pub user_id: serenity::UserId,
    pub is_owner: bool,
    pub permissions: serenity::Permissions,
    /// Position and id of the highest assigned role; `None` when the member
    /// only has the everyone role.
    pub top_role: Option<(u16, serenity::RoleId)>,
}

impl MemberRank {
    /// Resolve a rank from the member's assigned roles.
    ///
    /// `assigned` yields `(role id, position, permissions)` for each role the
    /// member holds; the everyone role's permissions are always included.
    pub fn resolve(
        user_id: serenity::UserId,
        owner_id: serenity::UserId,
        everyone: serenity::Permissions,
        assigned: impl IntoIterator<Item = (serenity::RoleId, u16, serenity::Permissions)>,
    ) -> Self {
        let is_owner = user_id == owner_id;
        let mut permissions = everyone;
        let mut top_role = None;

        for (role_id, position, role_permissions) in assigned {
            permissions |= role_permissions;
            if outranks(Some((position, role_id)), top_role) {
                top_role = Some((position, role_id));
            }
        }

        if is_owner {
            permissions = serenity::Permissions::all();
        }

        Self {
            user_id,
            is_owner,
            permissions,
            top_role,
        }
    }
}

/// Resolve a member's rank from a fetched guild.
pub fn rank_member(guild: &serenity::PartialGuild, member: &serenity::Member) -> MemberRank {
    let everyone_role_id = serenity::RoleId::new(guild.id.get());
    let everyone = guild
        .roles
        .get(&everyone_role_id)
        .map_or(serenity::Permissions::empty(), |role| role.permissions);

    let assigned = member
        .roles
        .iter()
        .filter(|role_id| **role_id != everyone_role_id)
        .filter_map(|role_id| guild.roles.get(role_id))
        .map(|role| (role.id, role.position, role.permissions));

    MemberRank::resolve(member.user.id, guild.owner_id, everyone, assigned)
}

/// Higher position wins; on a tie the older role (lower id) wins. Holding
/// any role outranks holding none.
fn outranks(
    left: Option<(u16, serenity::RoleId)>,
    right: Option<(u16, serenity::RoleId)>,
) -> bool {
    match (left, right) {
        (Some(_), None) => true,
        (None, _) => false,
        (Some((left_pos, left_id)), Some((right_pos, right_id))) => {
            left_pos > right_pos || (left_pos == right_pos && left_id < right_id)
        }
    }
}

/// What the bot may do to a target member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub kickable: bool,
    pub bannable: bool,
    pub moderatable: bool,
}

pub fn capabilities(bot: &MemberRank, target: &MemberRank) -> Capabilities {
    let manageable = !target.is_owner
        && target.user_id != bot.user_id
        && (bot.is_owner || outranks(bot.top_role, target.top_role));

    if !manageable {
        return Capabilities::default();
    }

    Capabilities {
        kickable: has_permission(bot.permissions, serenity::Permissions::KICK_MEMBERS),
        bannable: has_permission(bot.permissions, serenity::Permissions::BAN_MEMBERS),
        moderatable: !target
            .permissions
            .contains(serenity::Permissions::ADMINISTRATOR)
            && has_permission(bot.permissions, serenity::Permissions::MODERATE_MEMBERS),
    }
}
