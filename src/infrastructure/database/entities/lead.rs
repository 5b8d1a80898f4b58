// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub inq_id: Option<String>,
    pub full_name: String,
    pub destination_country: Option<String>,
    pub branch_id: Option<String>,
    pub status: Option<String>,
    pub whatsapp_no: Option<String>,
    pub inquiry_date: Option<ChronoDateTimeWithTimeZone>,
    pub allocated_user_id: Option<String>,
    pub remarks: Option<String>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
    #[sea_orm(has_many = "super::lead_note::Entity")]
    LeadNote,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl Related<super::lead_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeadNote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
