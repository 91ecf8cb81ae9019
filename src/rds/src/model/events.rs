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

use super::*;

message! {
    /// A subscription that publishes service events to an SNS topic.
    pub struct EventSubscription {
        "CustomerAwsId" => customer_aws_id: opt String,
        "CustSubscriptionId" => cust_subscription_id: opt String,
        "SnsTopicArn" => sns_topic_arn: opt String,
        /// `creating`, `modifying`, `deleting`, `active`, `no-permission`, or
        /// `topic-not-exist`.
        "Status" => status: opt String,
        /// The service reports this time as a plain string.
        "SubscriptionCreationTime" => subscription_creation_time: opt String,
        "SourceType" => source_type: opt String,
        "SourceIdsList" => source_ids_list: list String,
        "EventCategoriesList" => event_categories_list: list String,
        "Enabled" => enabled: opt bool,
        "EventSubscriptionArn" => event_subscription_arn: opt String,
    }
}

message! {
    #[builder(AddSourceIdentifierToSubscription)]
    pub struct AddSourceIdentifierToSubscriptionRequest {
        "SubscriptionName" => subscription_name: req String,
        /// An instance, cluster, snapshot, or parameter group identifier,
        /// matching the subscription's source type.
        "SourceIdentifier" => source_identifier: req String,
    }
}

message! {
    pub struct AddSourceIdentifierToSubscriptionResponse {
        "EventSubscription" => event_subscription: opt EventSubscription,
    }
}

message! {
    #[builder(RemoveSourceIdentifierFromSubscription)]
    pub struct RemoveSourceIdentifierFromSubscriptionRequest {
        "SubscriptionName" => subscription_name: req String,
        "SourceIdentifier" => source_identifier: req String,
    }
}

message! {
    pub struct RemoveSourceIdentifierFromSubscriptionResponse {
        "EventSubscription" => event_subscription: opt EventSubscription,
    }
}

message! {
    #[builder(CreateEventSubscription)]
    pub struct CreateEventSubscriptionRequest {
        "SubscriptionName" => subscription_name: req String,
        "SnsTopicArn" => sns_topic_arn: req String,
        /// `db-instance`, `db-cluster`, `db-parameter-group`,
        /// `db-security-group`, `db-snapshot`, or `db-cluster-snapshot`.
        /// All sources if unset.
        "SourceType" => source_type: opt String,
        "EventCategories" => event_categories: list String,
        "SourceIds" => source_ids: list String,
        "Enabled" => enabled: opt bool,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateEventSubscriptionResponse {
        "EventSubscription" => event_subscription: opt EventSubscription,
    }
}

message! {
    #[builder(DeleteEventSubscription)]
    pub struct DeleteEventSubscriptionRequest {
        "SubscriptionName" => subscription_name: req String,
    }
}

message! {
    pub struct DeleteEventSubscriptionResponse {
        "EventSubscription" => event_subscription: opt EventSubscription,
    }
}

message! {
    #[builder(ModifyEventSubscription)]
    pub struct ModifyEventSubscriptionRequest {
        "SubscriptionName" => subscription_name: req String,
        "SnsTopicArn" => sns_topic_arn: opt String,
        "SourceType" => source_type: opt String,
        "EventCategories" => event_categories: list String,
        "Enabled" => enabled: opt bool,
    }
}

message! {
    pub struct ModifyEventSubscriptionResponse {
        "EventSubscription" => event_subscription: opt EventSubscription,
    }
}

message! {
    #[builder(DescribeEventSubscriptions)]
    pub struct DescribeEventSubscriptionsRequest {
        "SubscriptionName" => subscription_name: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeEventSubscriptionsResponse {
        "Marker" => marker: opt String,
        "EventSubscriptionsList" => event_subscriptions_list: list EventSubscription,
    }
}

pageable!(DescribeEventSubscriptionsResponse, event_subscriptions_list: EventSubscription);

message! {
    /// The event categories of a source type.
    pub struct EventCategoriesMap {
        "SourceType" => source_type: opt String,
        "EventCategories" => event_categories: list String,
    }
}

message! {
    #[builder(DescribeEventCategories)]
    pub struct DescribeEventCategoriesRequest {
        "SourceType" => source_type: opt String,
        "Filters" => filters: list Filter,
    }
}

message! {
    pub struct DescribeEventCategoriesResponse {
        "EventCategoriesMapList" => event_categories_map_list: list EventCategoriesMap,
    }
}

message! {
    /// An event reported by the service.
    pub struct Event {
        "SourceIdentifier" => source_identifier: opt String,
        "SourceType" => source_type: opt String,
        "Message" => message: opt String,
        "EventCategories" => event_categories: list String,
        "Date" => date: opt Timestamp,
        "SourceArn" => source_arn: opt String,
    }
}

message! {
    /// Lists the events of the last 14 days.
    ///
    /// Use `start_time` and `end_time`, or `duration` (in minutes), to
    /// narrow the search. By default it returns the events of the past hour.
    #[builder(DescribeEvents)]
    pub struct DescribeEventsRequest {
        "SourceIdentifier" => source_identifier: opt String,
        "SourceType" => source_type: opt String,
        "StartTime" => start_time: opt Timestamp,
        "EndTime" => end_time: opt Timestamp,
        "Duration" => duration: opt i32,
        "EventCategories" => event_categories: list String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeEventsResponse {
        "Marker" => marker: opt String,
        "Events" => events: list Event,
    }
}

pageable!(DescribeEventsResponse, events: Event);
