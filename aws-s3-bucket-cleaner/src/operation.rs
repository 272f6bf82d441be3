/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation for emptying a bucket end to end
pub mod clean_bucket;

/// Operation for aborting every in-progress multipart upload in a bucket
pub mod abort_multipart_uploads;

/// Operation for deleting every object in a bucket
pub mod delete_all_objects;

/// Object listing/pagination shared by the delete operation
pub(crate) mod list_objects;
