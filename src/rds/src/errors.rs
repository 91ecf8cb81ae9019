// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The error conditions reported by the service.
//!
//! Each operation declares the conditions it may report. When a call fails
//! with one of these conditions the client returns a service error, and
//! [ErrorKind::from_error] recovers the condition:
//!
//! ```no_run
//! # use rds_admin::client::Rds;
//! use rds_admin::errors::ErrorKind;
//! # async fn sample(client: &Rds) -> gax::Result<()> {
//! match client.delete_db_instance().set_db_instance_identifier("my-db").send().await {
//!     Ok(_) => println!("deleting"),
//!     Err(e) if ErrorKind::from_error(&e) == Some(ErrorKind::DbInstanceNotFound) => {
//!         println!("nothing to delete");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(()) }
//! ```
//!
//! Codes the operation does not declare (throttling, parameter validation,
//! and so on) are still service errors, with the code available via
//! [gax::error::ServiceError::code], but they have no [ErrorKind].

use gax::error::{Error, ServiceError};

macro_rules! error_kinds {
    ($($variant:ident => ($name:literal, $code:literal),)*) => {
        /// A condition declared by one or more operations.
        ///
        /// The service may add new conditions over time, applications should
        /// include a wildcard arm when matching on this type.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ErrorKind {
            $(
                #[doc = concat!("The `", $name, "` condition, reported with the `", $code, "` code.")]
                $variant,
            )*
        }

        impl ErrorKind {
            /// All the known conditions.
            pub const ALL: &'static [ErrorKind] = &[$(ErrorKind::$variant,)*];

            /// The name of the condition.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The error code sent by the service.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Finds the condition for an error code sent by the service.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

error_kinds! {
    AuthorizationAlreadyExists => ("AuthorizationAlreadyExists", "AuthorizationAlreadyExists"),
    AuthorizationNotFound => ("AuthorizationNotFound", "AuthorizationNotFound"),
    AuthorizationQuotaExceeded => ("AuthorizationQuotaExceeded", "AuthorizationQuotaExceeded"),
    BackupPolicyNotFound => ("BackupPolicyNotFound", "BackupPolicyNotFoundFault"),
    CertificateNotFound => ("CertificateNotFound", "CertificateNotFound"),
    CustomAvailabilityZoneAlreadyExists => ("CustomAvailabilityZoneAlreadyExists", "CustomAvailabilityZoneAlreadyExists"),
    CustomAvailabilityZoneNotFound => ("CustomAvailabilityZoneNotFound", "CustomAvailabilityZoneNotFound"),
    CustomAvailabilityZoneQuotaExceeded => ("CustomAvailabilityZoneQuotaExceeded", "CustomAvailabilityZoneQuotaExceeded"),
    DbClusterAlreadyExists => ("DBClusterAlreadyExists", "DBClusterAlreadyExistsFault"),
    DbClusterBacktrackNotFound => ("DBClusterBacktrackNotFound", "DBClusterBacktrackNotFoundFault"),
    DbClusterEndpointAlreadyExists => ("DBClusterEndpointAlreadyExists", "DBClusterEndpointAlreadyExistsFault"),
    DbClusterEndpointNotFound => ("DBClusterEndpointNotFound", "DBClusterEndpointNotFoundFault"),
    DbClusterEndpointQuotaExceeded => ("DBClusterEndpointQuotaExceeded", "DBClusterEndpointQuotaExceededFault"),
    DbClusterNotFound => ("DBClusterNotFound", "DBClusterNotFoundFault"),
    DbClusterParameterGroupNotFound => ("DBClusterParameterGroupNotFound", "DBClusterParameterGroupNotFound"),
    DbClusterQuotaExceeded => ("DBClusterQuotaExceeded", "DBClusterQuotaExceededFault"),
    DbClusterRoleAlreadyExists => ("DBClusterRoleAlreadyExists", "DBClusterRoleAlreadyExists"),
    DbClusterRoleNotFound => ("DBClusterRoleNotFound", "DBClusterRoleNotFound"),
    DbClusterRoleQuotaExceeded => ("DBClusterRoleQuotaExceeded", "DBClusterRoleQuotaExceeded"),
    DbClusterSnapshotAlreadyExists => ("DBClusterSnapshotAlreadyExists", "DBClusterSnapshotAlreadyExistsFault"),
    DbClusterSnapshotNotFound => ("DBClusterSnapshotNotFound", "DBClusterSnapshotNotFoundFault"),
    DbInstanceAlreadyExists => ("DBInstanceAlreadyExists", "DBInstanceAlreadyExists"),
    DbInstanceAutomatedBackupNotFound => ("DBInstanceAutomatedBackupNotFound", "DBInstanceAutomatedBackupNotFound"),
    DbInstanceAutomatedBackupQuotaExceeded => ("DBInstanceAutomatedBackupQuotaExceeded", "DBInstanceAutomatedBackupQuotaExceeded"),
    DbInstanceNotFound => ("DBInstanceNotFound", "DBInstanceNotFound"),
    DbInstanceRoleAlreadyExists => ("DBInstanceRoleAlreadyExists", "DBInstanceRoleAlreadyExists"),
    DbInstanceRoleNotFound => ("DBInstanceRoleNotFound", "DBInstanceRoleNotFound"),
    DbInstanceRoleQuotaExceeded => ("DBInstanceRoleQuotaExceeded", "DBInstanceRoleQuotaExceeded"),
    DbLogFileNotFound => ("DBLogFileNotFound", "DBLogFileNotFoundFault"),
    DbParameterGroupAlreadyExists => ("DBParameterGroupAlreadyExists", "DBParameterGroupAlreadyExists"),
    DbParameterGroupNotFound => ("DBParameterGroupNotFound", "DBParameterGroupNotFound"),
    DbParameterGroupQuotaExceeded => ("DBParameterGroupQuotaExceeded", "DBParameterGroupQuotaExceeded"),
    DbProxyAlreadyExists => ("DBProxyAlreadyExists", "DBProxyTargetExistsFault"),
    DbProxyNotFound => ("DBProxyNotFound", "DBProxyNotFoundFault"),
    DbProxyQuotaExceeded => ("DBProxyQuotaExceeded", "DBProxyQuotaExceededFault"),
    DbProxyTargetAlreadyRegistered => ("DBProxyTargetAlreadyRegistered", "DBProxyTargetAlreadyRegisteredFault"),
    DbProxyTargetGroupNotFound => ("DBProxyTargetGroupNotFound", "DBProxyTargetGroupNotFoundFault"),
    DbProxyTargetNotFound => ("DBProxyTargetNotFound", "DBProxyTargetNotFoundFault"),
    DbSecurityGroupAlreadyExists => ("DBSecurityGroupAlreadyExists", "DBSecurityGroupAlreadyExists"),
    DbSecurityGroupNotFound => ("DBSecurityGroupNotFound", "DBSecurityGroupNotFound"),
    DbSecurityGroupNotSupported => ("DBSecurityGroupNotSupported", "DBSecurityGroupNotSupported"),
    DbSecurityGroupQuotaExceeded => ("DBSecurityGroupQuotaExceeded", "QuotaExceeded.DBSecurityGroup"),
    DbSnapshotAlreadyExists => ("DBSnapshotAlreadyExists", "DBSnapshotAlreadyExists"),
    DbSnapshotNotFound => ("DBSnapshotNotFound", "DBSnapshotNotFound"),
    DbSubnetGroupAlreadyExists => ("DBSubnetGroupAlreadyExists", "DBSubnetGroupAlreadyExists"),
    DbSubnetGroupDoesNotCoverEnoughAzs => ("DBSubnetGroupDoesNotCoverEnoughAZs", "DBSubnetGroupDoesNotCoverEnoughAZs"),
    DbSubnetGroupNotAllowed => ("DBSubnetGroupNotAllowed", "DBSubnetGroupNotAllowedFault"),
    DbSubnetGroupNotFound => ("DBSubnetGroupNotFound", "DBSubnetGroupNotFoundFault"),
    DbSubnetGroupQuotaExceeded => ("DBSubnetGroupQuotaExceeded", "DBSubnetGroupQuotaExceeded"),
    DbSubnetQuotaExceeded => ("DBSubnetQuotaExceeded", "DBSubnetQuotaExceededFault"),
    DbUpgradeDependencyFailure => ("DBUpgradeDependencyFailure", "DBUpgradeDependencyFailure"),
    DomainNotFound => ("DomainNotFound", "DomainNotFoundFault"),
    EventSubscriptionQuotaExceeded => ("EventSubscriptionQuotaExceeded", "EventSubscriptionQuotaExceeded"),
    ExportTaskAlreadyExists => ("ExportTaskAlreadyExists", "ExportTaskAlreadyExists"),
    ExportTaskNotFound => ("ExportTaskNotFound", "ExportTaskNotFound"),
    GlobalClusterAlreadyExists => ("GlobalClusterAlreadyExists", "GlobalClusterAlreadyExistsFault"),
    GlobalClusterNotFound => ("GlobalClusterNotFound", "GlobalClusterNotFoundFault"),
    GlobalClusterQuotaExceeded => ("GlobalClusterQuotaExceeded", "GlobalClusterQuotaExceededFault"),
    IamRoleMissingPermissions => ("IamRoleMissingPermissions", "IamRoleMissingPermissions"),
    IamRoleNotFound => ("IamRoleNotFound", "IamRoleNotFound"),
    InstallationMediaAlreadyExists => ("InstallationMediaAlreadyExists", "InstallationMediaAlreadyExists"),
    InstallationMediaNotFound => ("InstallationMediaNotFound", "InstallationMediaNotFound"),
    InstanceQuotaExceeded => ("InstanceQuotaExceeded", "InstanceQuotaExceeded"),
    InsufficientDbClusterCapacity => ("InsufficientDBClusterCapacity", "InsufficientDBClusterCapacityFault"),
    InsufficientDbInstanceCapacity => ("InsufficientDBInstanceCapacity", "InsufficientDBInstanceCapacity"),
    InsufficientStorageClusterCapacity => ("InsufficientStorageClusterCapacity", "InsufficientStorageClusterCapacity"),
    InvalidDbClusterCapacity => ("InvalidDBClusterCapacity", "InvalidDBClusterCapacityFault"),
    InvalidDbClusterEndpointState => ("InvalidDBClusterEndpointState", "InvalidDBClusterEndpointStateFault"),
    InvalidDbClusterSnapshotState => ("InvalidDBClusterSnapshotState", "InvalidDBClusterSnapshotStateFault"),
    InvalidDbClusterState => ("InvalidDBClusterState", "InvalidDBClusterStateFault"),
    InvalidDbInstanceAutomatedBackupState => ("InvalidDBInstanceAutomatedBackupState", "InvalidDBInstanceAutomatedBackupState"),
    InvalidDbInstanceState => ("InvalidDBInstanceState", "InvalidDBInstanceState"),
    InvalidDbParameterGroupState => ("InvalidDBParameterGroupState", "InvalidDBParameterGroupState"),
    InvalidDbProxyState => ("InvalidDBProxyState", "InvalidDBProxyStateFault"),
    InvalidDbSecurityGroupState => ("InvalidDBSecurityGroupState", "InvalidDBSecurityGroupState"),
    InvalidDbSnapshotState => ("InvalidDBSnapshotState", "InvalidDBSnapshotState"),
    InvalidDbSubnetGroup => ("InvalidDBSubnetGroup", "InvalidDBSubnetGroupFault"),
    InvalidDbSubnetGroupState => ("InvalidDBSubnetGroupState", "InvalidDBSubnetGroupStateFault"),
    InvalidDbSubnetState => ("InvalidDBSubnetState", "InvalidDBSubnetStateFault"),
    InvalidEventSubscriptionState => ("InvalidEventSubscriptionState", "InvalidEventSubscriptionState"),
    InvalidExportOnly => ("InvalidExportOnly", "InvalidExportOnly"),
    InvalidExportSourceState => ("InvalidExportSourceState", "InvalidExportSourceState"),
    InvalidExportTaskState => ("InvalidExportTaskState", "InvalidExportTaskStateFault"),
    InvalidGlobalClusterState => ("InvalidGlobalClusterState", "InvalidGlobalClusterStateFault"),
    InvalidOptionGroupState => ("InvalidOptionGroupState", "InvalidOptionGroupStateFault"),
    InvalidRestore => ("InvalidRestore", "InvalidRestoreFault"),
    InvalidS3Bucket => ("InvalidS3Bucket", "InvalidS3BucketFault"),
    InvalidSubnet => ("InvalidSubnet", "InvalidSubnet"),
    InvalidVpcNetworkState => ("InvalidVPCNetworkState", "InvalidVPCNetworkStateFault"),
    KmsKeyNotAccessible => ("KMSKeyNotAccessible", "KMSKeyNotAccessibleFault"),
    OptionGroupAlreadyExists => ("OptionGroupAlreadyExists", "OptionGroupAlreadyExistsFault"),
    OptionGroupNotFound => ("OptionGroupNotFound", "OptionGroupNotFoundFault"),
    OptionGroupQuotaExceeded => ("OptionGroupQuotaExceeded", "OptionGroupQuotaExceededFault"),
    PointInTimeRestoreNotEnabled => ("PointInTimeRestoreNotEnabled", "PointInTimeRestoreNotEnabled"),
    ProvisionedIopsNotAvailableInAz => ("ProvisionedIopsNotAvailableInAZ", "ProvisionedIopsNotAvailableInAZFault"),
    ReservedDbInstanceAlreadyExists => ("ReservedDBInstanceAlreadyExists", "ReservedDBInstanceAlreadyExists"),
    ReservedDbInstanceNotFound => ("ReservedDBInstanceNotFound", "ReservedDBInstanceNotFound"),
    ReservedDbInstanceQuotaExceeded => ("ReservedDBInstanceQuotaExceeded", "ReservedDBInstanceQuotaExceeded"),
    ReservedDbInstancesOfferingNotFound => ("ReservedDBInstancesOfferingNotFound", "ReservedDBInstancesOfferingNotFound"),
    ResourceNotFound => ("ResourceNotFound", "ResourceNotFoundFault"),
    SnsInvalidTopic => ("SNSInvalidTopic", "SNSInvalidTopic"),
    SnsNoAuthorization => ("SNSNoAuthorization", "SNSNoAuthorization"),
    SnsTopicArnNotFound => ("SNSTopicArnNotFound", "SNSTopicArnNotFound"),
    SharedSnapshotQuotaExceeded => ("SharedSnapshotQuotaExceeded", "SharedSnapshotQuotaExceeded"),
    SnapshotQuotaExceeded => ("SnapshotQuotaExceeded", "SnapshotQuotaExceeded"),
    SourceNotFound => ("SourceNotFound", "SourceNotFound"),
    StorageQuotaExceeded => ("StorageQuotaExceeded", "StorageQuotaExceeded"),
    StorageTypeNotSupported => ("StorageTypeNotSupported", "StorageTypeNotSupported"),
    SubnetAlreadyInUse => ("SubnetAlreadyInUse", "SubnetAlreadyInUse"),
    SubscriptionAlreadyExist => ("SubscriptionAlreadyExist", "SubscriptionAlreadyExist"),
    SubscriptionCategoryNotFound => ("SubscriptionCategoryNotFound", "SubscriptionCategoryNotFound"),
    SubscriptionNotFound => ("SubscriptionNotFound", "SubscriptionNotFound"),
}

impl ErrorKind {
    /// Returns the condition of a failed call.
    ///
    /// Returns `None` for errors that are not service errors, and for service
    /// errors with codes the called operation does not declare.
    pub fn from_error(error: &Error) -> Option<Self> {
        error
            .service_error()
            .filter(|e| e.is_declared())
            .and_then(|e| Self::from_code(e.code()))
    }

    /// Creates a service error reporting this condition.
    ///
    /// Applications mocking the client use this function to simulate
    /// failures.
    ///
    /// # Example
    /// ```
    /// # use rds_admin::errors::ErrorKind;
    /// let error = ErrorKind::DbClusterNotFound.into_error("cluster my-cluster not found");
    /// assert_eq!(ErrorKind::from_error(&error), Some(ErrorKind::DbClusterNotFound));
    /// ```
    pub fn into_error<T: Into<String>>(self, message: T) -> Error {
        Error::service(ServiceError::new(self.code(), message).set_declared(true))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
